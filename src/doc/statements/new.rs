/*!
# `NEW`

## Purpose
Erases the program and all variables, then shows `Program cleared`.
A running program stops.

*/
