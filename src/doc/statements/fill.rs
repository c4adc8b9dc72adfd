/*!
# `FILL <x>,<y>`

## Purpose
Flood fills the area around pixel x,y with the current pixel color.

## Remarks
Every pixel reachable up, down, left or right that has the same color
as x,y is replaced. Nothing happens when x,y already has the fill color.

## Example
```text
10 COLOR 0:RECT 10,10,50,50
20 COLOR 5:FILL 20,20
```

*/
