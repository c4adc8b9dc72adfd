/*!
# `HOME`

## Purpose
Moves the text cursor to the top left without clearing anything.

*/
