/*!
# `COLOR <foreground>[,<background>]`

## Purpose
Selects the palette colors used for text and drawing.

## Remarks
Both values must be 0 to 15. If either is out of range nothing changes
and `?ILLEGAL FUNCTION CALL; COLOR MUST BE 0 TO 15` is reported.
The foreground also becomes the pixel color for graphics.

| | | | |
|-|-|-|-|
| 0 BLACK | 4 PURPLE | 8 ORANGE | 12 GREY |
| 1 WHITE | 5 GREEN | 9 BROWN | 13 LIGHT GREEN |
| 2 RED | 6 BLUE | 10 LIGHT RED | 14 LIGHT BLUE |
| 3 CYAN | 7 YELLOW | 11 DARK GREY | 15 LIGHT GREY |

## Example
```text
COLOR 1,6
PRINT "WHITE ON BLUE"
```

*/
