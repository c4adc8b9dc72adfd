/*!
# `VTAB <row>`

## Purpose
Moves the text cursor to a row, counting from 1.

## Remarks
The column is unchanged. Also see `HTAB`.

*/
