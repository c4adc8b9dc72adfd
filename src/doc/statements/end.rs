/*!
# `END`

## Purpose
Stops the program and returns to direct mode.

## Example
```text
10 PRINT "HELLO"
20 END
30 PRINT "NOT REACHED"
RUN
HELLO
Program ended
```

*/
