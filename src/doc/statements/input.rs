/*!
# `INPUT ["<prompt string>";] <variable>`

## Purpose
Suspends execution and awaits a line from the terminal.

## Remarks
Without a prompt string `? ` is shown. The reply is stored as a number
when it reads as one, otherwise as a string. The prompt is not part of
the program's output.

## Example
```text
10 INPUT "WHAT IS YOUR NAME? "; N$
20 PRINT "HELLO"; N$
RUN
WHAT IS YOUR NAME? ZAPHOD
HELLO ZAPHOD
```

*/
