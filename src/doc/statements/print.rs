/*!
# `PRINT [<expression>][;|,][<expression>]...`
`?` may be typed instead of `PRINT`.

## Purpose
Writes values to the screen.

## Remarks
A semicolon joins two values with nothing between them.
A comma puts one space between them.
Ending with a semicolon keeps the cursor on the same line.
Ending with a comma writes the space and then ends the line.

## Example
```text
PRINT "A";"B","C"
AB C
```

*/
