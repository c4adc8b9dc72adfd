/*!
# `[LET] <variable>=<expression>`

## Purpose
Assigns a value to a variable.

## Remarks
The word `LET` is optional. Any variable can hold a number or a string.
A `$` at the end of a name is allowed and is simply part of the name.

## Example
```text
LET A=5
B$="HELLO"
```

*/
