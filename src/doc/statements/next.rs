/*!
# `NEXT [<variable>]`
Also see `FOR`

## Purpose
Used to indicate the end of a `FOR` loop.

## Remarks
`FOR` loops are stack based and `NEXT` always works on the innermost one.
Specifying the optional variable here will enforce that it matches;
outer loops are never searched.
A `STEP` of zero ends the loop on the first `NEXT`.

## Example
```text
10 FOR I = 1 TO 3
20 PRINT I
30 NEXT I
RUN
1
2
3
```

*/
