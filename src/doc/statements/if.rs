/*!
# `IF <condition> THEN <statement>`

## Purpose
Execute a statement contingent on a comparison.

## Remarks
The condition is one of `x>y`, `x<y` or `x=y` where x and y are
expressions. The operators are searched for in that order and the
condition splits at the first one found, so `>=`, `<=` and `<>`
are not comparisons. A condition without any of them is false.
Both sides compare as numbers.

`THEN` must have a space on either side and may appear only once,
so an `IF` cannot follow `THEN`. There is no `ELSE`.
The statement after `THEN` may be any other statement.
A `GOTO` or `NEXT` after `THEN` transfers control as usual, but
an `END` after `THEN` only ends the `IF`: execution continues
with the next line.

## Example
```text
10 LET A = 10
20 IF A > 5 THEN PRINT "BIG"
30 IF A < 5 THEN PRINT "SMALL"
40 IF A = 10 THEN GOTO 60
50 PRINT "NOT REACHED"
60 PRINT "DONE"
RUN
BIG
DONE
```

*/
