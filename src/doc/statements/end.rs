/*!
# `END`

## Purpose
Immediately and unconditionally stop running the program.

## Remarks
`END` at the end of a program is optional.
Running off the last line stops the program the same way.
Output produced before `END` is kept.

## Example
```text
10 PRINT "HELLO"
20 END
30 PRINT "THIS DOES NOT PRINT"
RUN
HELLO
```

*/
