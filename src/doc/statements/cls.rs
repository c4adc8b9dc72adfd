/*!
# `CLS`

## Purpose
Clears the text screen and the graphics surface.

## Remarks
The cursor returns to the top left. Graphics clear to light grey.

*/
