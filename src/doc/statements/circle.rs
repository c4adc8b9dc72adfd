/*!
# `CIRCLE <x>,<y>,<r>[,F]`

## Purpose
Draws a circle centered on pixel x,y with radius r.

## Remarks
Uses the current pixel color, which is the last `COLOR` foreground.
Add `F` to fill the circle. Parts that fall off the surface are not drawn.

## Example
```text
COLOR 2:CIRCLE 120,80,30,F
```

*/
