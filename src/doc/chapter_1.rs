/*!
# Expressions and Types

Variables hold either a whole number or a string. Names start with a
letter followed by letters or digits, and may end with `$`.
The `$` does not change what a variable can hold.
A variable that has never been assigned is 0.

Numbers are 32-bit integers. Arithmetic uses `+ - * /` and is
evaluated strictly left to right, so `1 + 2 * 3` is 9.
Division drops any remainder. Results too large to fit report
`?ERROR: OVERFLOW` and dividing by zero reports
`?ERROR: DIVISION BY ZERO`.

Strings are written in double quotes. Joining with `+` makes a string
whenever at least one part is a quoted string. Numbers are converted.

```text
A=5
PRINT "A IS " + A
A IS 5
```

`CHR$(n)` is the character with code n, for n from 1 to 255.
Any other code gives `?`. To join two `CHR$` results, start
with a quoted string so the `+` means joining.

```text
PRINT "" + CHR$(72) + CHR$(73)
HI
```

Expression text that is none of the above is used as it is.
`PRINT HELLO THERE` prints `HELLO THERE`.

*/
