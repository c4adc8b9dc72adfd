/*!
# `LINE <x1>,<y1>,<x2>,<y2>`

## Purpose
Draws a straight line between two pixels in the current pixel color.

## Remarks
The line stops where it leaves the surface.

## Example
```text
LINE 0,0,239,159
```

*/
