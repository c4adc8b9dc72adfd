/*!
# `LIST`

## Purpose
Shows the program, one numbered line at a time, in line number order.

## Remarks
An empty program shows `No program lines`.

*/
