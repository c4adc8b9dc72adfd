/*!
# `NEXT [<variable>]`
Also see `FOR`

## Purpose
Marks the end of a `FOR` loop.

## Remarks
Without a variable, the innermost loop advances. With a variable,
the loop for that variable advances and loops inside it are abandoned.
`?NEXT WITHOUT FOR` is reported when there is no such loop.

*/
