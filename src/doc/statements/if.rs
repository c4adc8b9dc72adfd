/*!
# `IF <condition> THEN <statement> [ELSE <statement>]`

## Purpose
Runs one statement when a condition holds and, optionally, another when it doesn't.

## Remarks
The condition compares two expressions with one of
`=`, `<>`, `<`, `<=`, `>` or `>=`.
Numbers compare as numbers and strings compare alphabetically.
Without a comparison, a non-zero number or a non-empty string is true.

## Example
```text
IF A > 10 THEN PRINT "BIG" ELSE PRINT "SMALL"
IF N$ THEN PRINT "HELLO " + N$
```

*/
