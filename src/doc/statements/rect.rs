/*!
# `RECT <x1>,<y1>,<x2>,<y2>[,F]`

## Purpose
Draws a rectangle with opposite corners x1,y1 and x2,y2.

## Remarks
Add `F` for a filled rectangle. Corners may be given in any order
and are clamped to the surface.

*/
