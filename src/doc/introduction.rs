/*!
# Introductory Tutorial

Start the `retro` executable in a terminal. When you see `READY.` the
interpreter is waiting for a statement. Type CTRL-D to exit.
Stop a running program with CTRL-C.

<pre><code>&nbsp;  READY.
&nbsp;> print "Hello World"
&nbsp;  Hello World
&nbsp;  READY.
</code></pre>

A statement typed on its own runs immediately. This is direct mode.
Put a number in front and it is stored as a program line instead.
Line numbers go from 0 to 65529.

<pre><code>&nbsp;> 10 print "Hello World"
&nbsp;> 20 end
&nbsp;> run
&nbsp;  Hello World
</code></pre>

Typing a line number that already exists replaces that line.
Typing the number alone deletes it. `LIST` shows the program in order
no matter what order the lines were typed. Type a line number and
press TAB to bring an existing line back for editing.

<pre><code>&nbsp;> 20
&nbsp;> 5 color 2
&nbsp;> list
&nbsp;  5 color 2
&nbsp;  10 print "Hello World"
</code></pre>

Keywords may be typed in any case. Program lines are kept exactly as typed.

There is a 240 by 160 pixel surface underneath the text. Start the
terminal with `--graphics` to see it drawn after each command.

<pre><code>&nbsp;> 10 cls
&nbsp;> 20 color 6
&nbsp;> 30 circle 120,80,40,f
&nbsp;> 40 color 7
&nbsp;> 50 line 0,0,239,159
&nbsp;> run
</code></pre>

Diagnostics are written to stderr. Set `RUST_LOG=debug` to follow
lines being stored, programs starting and stopping, and loops.

*/
