/*!
# `REM <anything>`

## Purpose
A remark. Nothing after `REM` is executed.

*/
