/*!
# `RUN`

## Purpose
Runs the program from its lowest line number.

## Remarks
Loops left running from before are forgotten. Variables keep their values
until `NEW`. Stop a running program with CTRL-C.

*/
