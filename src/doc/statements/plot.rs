/*!
# `PLOT <x>,<y>`

## Purpose
Sets one pixel to the current pixel color.

## Remarks
The surface is 240 by 160 pixels with 0,0 at the top left.
Pixels outside the surface are ignored.

*/
