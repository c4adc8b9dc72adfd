/*!
# `HTAB <column>`

## Purpose
Moves the text cursor to a column, counting from 1.

## Remarks
The row is unchanged. Columns past the edge stop at the edge.
Also see `VTAB`.

## Example
```text
HTAB 10:PRINT "INDENTED"
```

*/
