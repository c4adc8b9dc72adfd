/*!
# Errors and Limits

Errors are reported with a leading `?`. In a program the line
number follows. A program keeps going after reporting an error.
Errors met while computing a value also say `ERROR:`, as in
`?ERROR: DIVISION BY ZERO IN 30`.

| Message | Cause |
|-|-|
| `SYNTAX ERROR` | A statement that can't be understood |
| `NEXT WITHOUT FOR` | `NEXT` with no matching loop |
| `ILLEGAL FUNCTION CALL` | A `COLOR` outside 0 to 15 |
| `OVERFLOW` | A number too large |
| `OUT OF MEMORY` | Too many variables or nested loops |
| `DIVISION BY ZERO` | `/` by zero |
| `ILLEGAL DIRECT` | `FOR` or `NEXT` typed in direct mode |
| `TYPE MISMATCH` | A string where a number is needed |
| `LINE BUFFER OVERFLOW` | An input line over 255 characters |
| `BREAK` | CTRL-C stopped the program |

Line numbers are 0 to 65529. Loops nest 255 deep.
There can be 65535 variables.

*/
