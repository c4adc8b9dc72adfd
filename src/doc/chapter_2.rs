/*!
# Statements
*/

#[path = "statements/circle.rs"]
#[allow(non_snake_case)]
pub mod CIRCLE;

#[path = "statements/cls.rs"]
#[allow(non_snake_case)]
pub mod CLS;

#[path = "statements/color.rs"]
#[allow(non_snake_case)]
pub mod COLOR;

#[path = "statements/end.rs"]
#[allow(non_snake_case)]
pub mod END;

#[path = "statements/fill.rs"]
#[allow(non_snake_case)]
pub mod FILL;

#[path = "statements/for.rs"]
#[allow(non_snake_case)]
pub mod FOR;

#[path = "statements/home.rs"]
#[allow(non_snake_case)]
pub mod HOME;

#[path = "statements/htab.rs"]
#[allow(non_snake_case)]
pub mod HTAB;

#[path = "statements/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "statements/let.rs"]
#[allow(non_snake_case)]
pub mod LET;

#[path = "statements/line.rs"]
#[allow(non_snake_case)]
pub mod LINE;

#[path = "statements/list.rs"]
#[allow(non_snake_case)]
pub mod LIST;

#[path = "statements/new.rs"]
#[allow(non_snake_case)]
pub mod NEW;

#[path = "statements/next.rs"]
#[allow(non_snake_case)]
pub mod NEXT;

#[path = "statements/plot.rs"]
#[allow(non_snake_case)]
pub mod PLOT;

#[path = "statements/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "statements/rect.rs"]
#[allow(non_snake_case)]
pub mod RECT;

#[path = "statements/rem.rs"]
#[allow(non_snake_case)]
pub mod REM;

#[path = "statements/run.rs"]
#[allow(non_snake_case)]
pub mod RUN;

#[path = "statements/vtab.rs"]
#[allow(non_snake_case)]
pub mod VTAB;
