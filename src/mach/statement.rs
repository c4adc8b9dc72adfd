use super::runtime::State;
use super::{eval, LoopFrame, Operation, Runtime, Val};
use crate::display::{palette, DisplayPort};
use crate::error;
use crate::lang::ast::*;
use crate::lang::Error;
use std::convert::TryFrom;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

impl Runtime {
    /// Executes one parsed statement against this interpreter.
    pub(super) fn statement(&mut self, port: &mut dyn DisplayPort, statement: &Statement) -> Result<()> {
        use Statement::*;
        match statement {
            Circle(x, y, r, filled) => {
                let (x, y, r) = (self.int(x)?, self.int(y)?, self.int(r)?);
                port.draw_circle(x, y, r, *filled, None);
                Ok(())
            }
            Cls => {
                port.clear_screen();
                port.clear_graphics();
                Ok(())
            }
            Color(fg, bg) => self.r#color(port, fg, bg.as_ref()),
            End => {
                self.stop();
                port.add_str("Program ended\n");
                Ok(())
            }
            Fill(x, y) => {
                let (x, y) = (self.int(x)?, self.int(y)?);
                port.flood_fill(x, y);
                Ok(())
            }
            For(var, from, to, step) => self.r#for(var, from, to, step.as_ref()),
            Home => {
                port.move_cursor_to(Some(0), Some(0));
                Ok(())
            }
            Htab(column) => {
                let column = self.int(column)?.saturating_sub(1);
                port.move_cursor_to(Some(column), None);
                Ok(())
            }
            If(condition, then, otherwise) => {
                if self.condition(condition)? {
                    self.statement(port, then)
                } else if let Some(otherwise) = otherwise {
                    self.statement(port, otherwise)
                } else {
                    Ok(())
                }
            }
            Let(var, expr) => {
                let value = self.val(expr)?;
                self.vars.store(var.as_rc(), value)
            }
            Line(x1, y1, x2, y2) => {
                let (x1, y1) = (self.int(x1)?, self.int(y1)?);
                let (x2, y2) = (self.int(x2)?, self.int(y2)?);
                port.draw_line(x1, y1, x2, y2, None);
                Ok(())
            }
            List => {
                self.r#list(port);
                Ok(())
            }
            New => {
                self.clear_program();
                port.add_str("Program cleared\n");
                Ok(())
            }
            Next(var) => self.r#next(var.as_ref()),
            Plot(x, y) => {
                let (x, y) = (self.int(x)?, self.int(y)?);
                port.draw_pixel(x, y, None);
                Ok(())
            }
            Print(items) => self.r#print(port, items),
            Rect(x1, y1, x2, y2, filled) => {
                let (x1, y1) = (self.int(x1)?, self.int(y1)?);
                let (x2, y2) = (self.int(x2)?, self.int(y2)?);
                port.draw_rect(x1, y1, x2, y2, *filled, None);
                Ok(())
            }
            Rem => Ok(()),
            Run => {
                self.r#run(port);
                Ok(())
            }
            Vtab(row) => {
                let row = self.int(row)?.saturating_sub(1);
                port.move_cursor_to(None, Some(row));
                Ok(())
            }
        }
    }

    fn val(&self, expr: &Expression) -> Result<Val> {
        eval(&self.vars, expr.as_str())
    }

    fn int(&self, expr: &Expression) -> Result<i32> {
        i32::try_from(self.val(expr)?)
    }

    fn condition(&self, condition: &Condition) -> Result<bool> {
        match condition {
            Condition::Compare(lhs, relation, rhs) => {
                let (lhs, rhs) = (self.val(lhs)?, self.val(rhs)?);
                Ok(Operation::compare(&lhs, *relation, &rhs))
            }
            Condition::Truthy(expr) => Ok(self.val(expr)?.is_truthy()),
        }
    }

    fn r#print(&mut self, port: &mut dyn DisplayPort, items: &[PrintItem]) -> Result<()> {
        let mut s = String::new();
        for item in items {
            match item {
                PrintItem::Expression(expr) => s.push_str(&self.val(expr)?.to_string()),
                PrintItem::Space => s.push(' '),
                PrintItem::Newline => s.push('\n'),
            }
        }
        port.add_str(&s);
        Ok(())
    }

    fn r#color(
        &mut self,
        port: &mut dyn DisplayPort,
        fg: &Expression,
        bg: Option<&Expression>,
    ) -> Result<()> {
        let fg = color_index(self.int(fg)?)?;
        let bg = match bg {
            Some(bg) => Some(color_index(self.int(bg)?)?),
            None => None,
        };
        trace!(fg = palette::name(fg), bg = bg.map(palette::name), "color");
        port.set_text_color(fg);
        if let Some(bg) = bg {
            port.set_background_color(bg);
        }
        Ok(())
    }

    fn r#list(&self, port: &mut dyn DisplayPort) {
        if self.listing.is_empty() {
            port.add_str("No program lines\n");
            return;
        }
        for line in self.listing.lines() {
            port.add_str(&format!("{}\n", line));
        }
    }

    fn r#run(&mut self, port: &mut dyn DisplayPort) {
        self.stop();
        self.loops.clear();
        if self.listing.is_empty() {
            port.add_str("No program to run\n");
            return;
        }
        self.lines = self.listing.line_numbers();
        self.state = State::Running;
        debug!(lines = self.lines.len(), "program started");
    }

    fn clear_program(&mut self) {
        self.stop();
        self.listing.clear();
        self.vars.clear();
        self.loops.clear();
    }

    fn r#for(
        &mut self,
        var: &Ident,
        from: &Expression,
        to: &Expression,
        step: Option<&Expression>,
    ) -> Result<()> {
        if self.state != State::Running {
            return Err(error!(IllegalDirect));
        }
        let from = self.int(from)?;
        let limit = self.int(to)?;
        let step = match step {
            Some(step) => self.int(step)?,
            None => 1,
        };
        self.vars.store(var.as_rc(), Val::Integer(from))?;
        if let Some(index) = self.loops.rposition(|frame| frame.var_name == *var.as_rc()) {
            self.loops.truncate(index);
        }
        self.loops.push(LoopFrame {
            var_name: var.as_rc().clone(),
            limit,
            step,
            resume: self.pc,
        })?;
        debug!(var = %var, from, limit, step, depth = self.loops.len(), "loop pushed");
        Ok(())
    }

    fn r#next(&mut self, var: Option<&Ident>) -> Result<()> {
        if self.state != State::Running {
            return Err(error!(IllegalDirect));
        }
        let index = match var {
            Some(var) => self.loops.rposition(|frame| frame.var_name == *var.as_rc()),
            None => self.loops.len().checked_sub(1),
        };
        let frame = match index.and_then(|index| self.loops.get(index)) {
            Some(frame) => frame.clone(),
            None => return Err(error!(NextWithoutFor)),
        };
        if let Some(index) = index {
            self.loops.truncate(index + 1);
        }
        let current = i32::try_from(self.vars.fetch(&frame.var_name))?;
        let (next, again) = frame.advance(current)?;
        self.vars.store(&frame.var_name, Val::Integer(next))?;
        if again {
            self.pc = frame.resume;
        } else {
            self.loops.pop()?;
            debug!(var = %frame.var_name, depth = self.loops.len(), "loop done");
        }
        Ok(())
    }
}

fn color_index(n: i32) -> Result<u8> {
    if (0..=15).contains(&n) {
        Ok(n as u8)
    } else {
        Err(error!(IllegalFunctionCall; "COLOR MUST BE 0 TO 15"))
    }
}
