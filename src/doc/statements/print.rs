/*!
# `PRINT [<list of expressions>]`

## Purpose
Output information to the terminal for the operator.

## Remarks
A `PRINT` by itself outputs an empty line.
Expressions are separated with semicolons (;) and printed
with a single space between them. Quoted text is printed as is.
Numbers with no fractional part print without a decimal point.

## Example
```text
10 LET A$ = "HELLO"
20 PRINT A$; " "; "WORLD"; 1 / 4
RUN
HELLO   WORLD 0.25
```

*/
