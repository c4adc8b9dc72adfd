/*!
# `FOR <variable>=x TO y [STEP z]`
Where x, y, and z are expressions.
## Purpose
Used with `NEXT` to repeat a group of program lines
while counting through a sequence of numbers.

## Remarks
x, y, then z are evaluated once. The variable is set to x and
the lines after `FOR` execute until a `NEXT`.
`NEXT` adds z to the variable. Counting up, the loop repeats while
the variable is not past y. Counting down, it repeats while the
variable is not below y. The body always runs at least once.

Starting a `FOR` on a variable which already has a loop running
abandons that loop and any loops inside it.

`FOR` is only allowed in a program, not in direct mode.

## Example
```text
10 FOR I=1 TO 7 STEP 2
20 PRINT I;
30 NEXT I
RUN
1357
```

*/
