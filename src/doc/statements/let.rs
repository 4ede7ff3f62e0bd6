/*!
# `LET <variable> = <expression>`

## Purpose
Assign a value to the variable.

## Remarks
The word `LET` is required. The variable comes into existence on
first assignment and takes whatever type the expression has:
integer, floating point or string. Names are case sensitive.
A trailing `$` is a naming convention only.

## Example
```text
10 LET A = 10
20 LET A$ = "TEN"
30 PRINT A; A$
RUN
10 TEN
```

*/
