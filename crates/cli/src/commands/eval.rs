//! Evaluate one library operation on raw stored operands
//!
//! Operands are the integers the library stores (`1200` is 12.00 in decimal
//! mode), so every bit pattern can be reached from the command line. The
//! result line reads like arithmetic: `12.00*3.00=36.00`, or
//! `ln(2.00)=0.69` for operations without an infix symbol.

use anyhow::{anyhow, bail, ensure, Context, Result};
use clap::ValueEnum;
use s16math::convert::{degrees_to_radians, gcd, radians_to_degrees, reduce_to_ratio, Ratio};
use s16math::format::Fixed;
use s16math::math::{
    arccosine, arcsine, arctangent, arctangent2, cosecant, cosine, cotangent, exponential, hypot,
    hypot_overflows, log10, log_base, log_overflows, natural_log, nth_root, root_overflows,
    secant, sincos, sine, sqrt_overflows, square_root, try_tangent, SinCos,
};
use s16math::ops::{
    add, add_overflows, div_overflows, factorial, mul_overflows, multiply, power, square,
    square_overflows, sub_overflows, subtract, try_divide,
};
use s16math::qformat::{round_even, to_binary_point, to_decimal_point};
use s16math::{Binary, Decimal, MathError, Scale};
use std::time::{Duration, Instant};

/// Library operation selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Op {
    /// a + b
    Add,
    /// a - b
    Sub,
    /// a * b
    Mul,
    /// a / b
    Div,
    /// a raised to the integer power b
    Pow,
    /// Integer b-th root of a
    Root,
    /// Square root of a
    Sqrt,
    /// a * a
    Sq,
    /// Natural logarithm of a
    Ln,
    /// Logarithm of b to base a
    Log,
    /// Base-10 logarithm of a
    Log10,
    /// e raised to the power a
    Exp,
    /// Sine of a radians
    Sin,
    /// Cosine of a radians
    Cos,
    /// Tangent of a radians
    Tan,
    /// Cotangent of a radians
    Cot,
    /// Secant of a radians
    Sec,
    /// Cosecant of a radians
    Csc,
    /// Cosine and sine of a radians in one rotation
    Sincos,
    /// Arcsine of a
    Asin,
    /// Arccosine of a
    Acos,
    /// Arctangent of a
    Atan,
    /// Angle of the point (b, a), that is atan2(y = a, x = b)
    Atan2,
    /// Length of the vector (a, b)
    Hypot,
    /// a degrees in radians
    Deg,
    /// a radians in degrees
    Rad,
    /// Greatest common divisor of two non-negative integers
    Gcd,
    /// Nearest fraction with a numerator and denominator below 128 and 256
    Ratio,
    /// Factorial of the integer a
    Fact,
    /// Round off the least significant field, ties to even
    Round,
    /// Binary point plain number read as decimal (`to_binary_point`)
    Tobin,
    /// Decimal plain number read as binary point (`to_decimal_point`)
    Todec,
}

impl Op {
    /// Command-line name
    pub fn name(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Mul => "mul",
            Op::Div => "div",
            Op::Pow => "pow",
            Op::Root => "root",
            Op::Sqrt => "sqrt",
            Op::Sq => "sq",
            Op::Ln => "ln",
            Op::Log => "log",
            Op::Log10 => "log10",
            Op::Exp => "exp",
            Op::Sin => "sin",
            Op::Cos => "cos",
            Op::Tan => "tan",
            Op::Cot => "cot",
            Op::Sec => "sec",
            Op::Csc => "csc",
            Op::Sincos => "sincos",
            Op::Asin => "asin",
            Op::Acos => "acos",
            Op::Atan => "atan",
            Op::Atan2 => "atan2",
            Op::Hypot => "hypot",
            Op::Deg => "deg",
            Op::Rad => "rad",
            Op::Gcd => "gcd",
            Op::Ratio => "ratio",
            Op::Fact => "fact",
            Op::Round => "round",
            Op::Tobin => "tobin",
            Op::Todec => "todec",
        }
    }

    /// Number of operands the operation takes
    pub fn arity(self) -> usize {
        match self {
            Op::Add
            | Op::Sub
            | Op::Mul
            | Op::Div
            | Op::Pow
            | Op::Root
            | Op::Log
            | Op::Atan2
            | Op::Hypot
            | Op::Gcd => 2,
            _ => 1,
        }
    }

    fn symbol(self) -> Option<char> {
        match self {
            Op::Add => Some('+'),
            Op::Sub => Some('-'),
            Op::Mul => Some('*'),
            Op::Div => Some('/'),
            Op::Pow => Some('^'),
            _ => None,
        }
    }

    /// How each operand is displayed
    fn operands(self, a: i16, b: i16) -> (Value, Value) {
        match self {
            Op::Pow | Op::Root => (Value::Number(a), Value::Integer(b as i32)),
            Op::Sin | Op::Cos | Op::Tan | Op::Cot | Op::Sec | Op::Csc | Op::Sincos | Op::Rad => {
                (Value::Radian(a), Value::Radian(b))
            }
            Op::Deg => (Value::Degree(a), Value::Degree(b)),
            Op::Gcd | Op::Fact => (Value::Integer(a as i32), Value::Integer(b as i32)),
            Op::Tobin => (Value::Binary(a), Value::Binary(b)),
            Op::Todec => (Value::Decimal(a), Value::Decimal(b)),
            _ => (Value::Number(a), Value::Number(b)),
        }
    }
}

/// A result or operand, tagged with how to render it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// Plain number under the active policy
    Number(i16),
    /// Angle in radians under the active policy
    Radian(i16),
    /// Angle in degrees under the active policy
    Degree(i16),
    /// Unscaled integer
    Integer(i32),
    /// Plain number in decimal mode, whatever the active policy
    Decimal(i16),
    /// Plain number in binary mode, whatever the active policy
    Binary(i16),
    /// Cosine and sine
    Pair(SinCos),
    /// Signed fraction
    Ratio(Ratio),
}

impl Value {
    fn render<S: Scale>(self) -> String {
        match self {
            Value::Number(v) => Fixed::<S>::number(v).to_string(),
            Value::Radian(v) => Fixed::<S>::radians(v).to_string(),
            Value::Degree(v) => Fixed::<S>::degrees(v).to_string(),
            Value::Integer(v) => v.to_string(),
            Value::Decimal(v) => Fixed::<Decimal>::number(v).to_string(),
            Value::Binary(v) => Fixed::<Binary>::number(v).to_string(),
            Value::Pair(sc) => format!(
                "{},{}",
                Fixed::<S>::number(sc.cos),
                Fixed::<S>::number(sc.sin)
            ),
            Value::Ratio(r) => format!("{}/{}", r.numerator, r.denominator),
        }
    }
}

/// Result of one evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// `<expression>=<result>`
    pub text: String,
    /// Whether the operation's overflow check fired
    pub overflow: bool,
    /// Time spent in the library call
    pub elapsed: Duration,
}

impl Outcome {
    /// The result line, with the timing suffix when `show_time` is set
    pub fn line(&self, show_time: bool) -> String {
        if show_time {
            format!(
                "{},t={}.{:09} sec",
                self.text,
                self.elapsed.as_secs(),
                self.elapsed.subsec_nanos()
            )
        } else {
            self.text.clone()
        }
    }
}

fn math_error(e: MathError) -> anyhow::Error {
    anyhow!("{}", e)
}

fn unsigned(op: Op, v: i16) -> Result<u16> {
    u16::try_from(v)
        .with_context(|| format!("`{}` needs a non-negative integer, got {}", op.name(), v))
}

/// Accumulates the time spent inside library calls
#[derive(Debug, Default)]
struct Stopwatch {
    elapsed: Duration,
}

impl Stopwatch {
    fn time<T>(&mut self, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let value = f();
        self.elapsed += start.elapsed();
        value
    }
}

/// Run `op` under scale policy `S`
///
/// Only the library call itself runs under `clock`; operand checks and the
/// overflow predicates do not.
fn compute<S: Scale>(op: Op, a: i16, b: i16, clock: &mut Stopwatch) -> Result<(Value, bool)> {
    let computed = match op {
        Op::Add => {
            let r = clock.time(|| add(a, b));
            (Value::Number(r), add_overflows(r, a, b))
        }
        Op::Sub => {
            let r = clock.time(|| subtract(a, b));
            (Value::Number(r), sub_overflows(r, a, b))
        }
        Op::Mul => {
            let r = clock.time(|| multiply::<S>(a, b));
            (Value::Number(r), mul_overflows::<S>(r, a, b))
        }
        Op::Div => {
            let r = clock.time(|| try_divide::<S>(a, b)).map_err(math_error)?;
            (Value::Number(r), div_overflows::<S>(r, a, b))
        }
        Op::Pow => {
            let n = unsigned(op, b)?;
            let (r, overflowed) = clock.time(|| power::<S>(a, n));
            (Value::Number(r), overflowed)
        }
        Op::Root => {
            let n = unsigned(op, b)?;
            let r = clock.time(|| nth_root::<S>(a, n));
            (Value::Number(r), root_overflows::<S>(r, a, n))
        }
        Op::Sqrt => {
            let r = clock.time(|| square_root::<S>(a));
            (Value::Number(r), sqrt_overflows::<S>(r, a))
        }
        Op::Sq => {
            let r = clock.time(|| square::<S>(a));
            (Value::Number(r), square_overflows::<S>(r, a))
        }
        Op::Ln => {
            let r = clock.time(|| natural_log::<S>(a));
            (Value::Number(r), log_overflows::<S>(r))
        }
        Op::Log => {
            let r = clock.time(|| log_base::<S>(a, b));
            (Value::Number(r), log_overflows::<S>(r))
        }
        Op::Log10 => {
            let r = clock.time(|| log10::<S>(a));
            (Value::Number(r), log_overflows::<S>(r))
        }
        Op::Exp => {
            let (r, overflowed) = clock.time(|| exponential::<S>(a));
            (Value::Number(r), overflowed)
        }
        Op::Sin => (Value::Number(clock.time(|| sine::<S>(a))), false),
        Op::Cos => (Value::Number(clock.time(|| cosine::<S>(a))), false),
        Op::Tan => {
            let sc = sincos::<S>(a);
            let r = clock.time(|| try_tangent::<S>(a)).map_err(math_error)?;
            (Value::Number(r), div_overflows::<S>(r, sc.sin, sc.cos))
        }
        Op::Cot => {
            let sc = sincos::<S>(a);
            ensure!(sc.sin != 0, "{}", MathError::DivideByZero);
            let r = clock.time(|| cotangent::<S>(a));
            (Value::Number(r), div_overflows::<S>(r, sc.cos, sc.sin))
        }
        Op::Sec => {
            let sc = sincos::<S>(a);
            ensure!(sc.cos != 0, "{}", MathError::DivideByZero);
            let r = clock.time(|| secant::<S>(a));
            (Value::Number(r), div_overflows::<S>(r, S::UNIT, sc.cos))
        }
        Op::Csc => {
            let sc = sincos::<S>(a);
            ensure!(sc.sin != 0, "{}", MathError::DivideByZero);
            let r = clock.time(|| cosecant::<S>(a));
            (Value::Number(r), div_overflows::<S>(r, S::UNIT, sc.sin))
        }
        Op::Sincos => (Value::Pair(clock.time(|| sincos::<S>(a))), false),
        Op::Asin => (Value::Radian(clock.time(|| arcsine::<S>(a))), false),
        Op::Acos => (Value::Radian(clock.time(|| arccosine::<S>(a))), false),
        Op::Atan => (Value::Radian(clock.time(|| arctangent::<S>(a))), false),
        Op::Atan2 => (Value::Radian(clock.time(|| arctangent2::<S>(a, b))), false),
        Op::Hypot => {
            let r = clock.time(|| hypot::<S>(a, b));
            (Value::Number(r), hypot_overflows::<S>(r, a, b))
        }
        Op::Deg => (Value::Radian(clock.time(|| degrees_to_radians::<S>(a))), false),
        Op::Rad => (Value::Degree(clock.time(|| radians_to_degrees::<S>(a))), false),
        Op::Gcd => {
            let (u, v) = (unsigned(op, a)?, unsigned(op, b)?);
            let g = clock.time(|| gcd(u, v));
            (Value::Integer(g as i32), false)
        }
        Op::Ratio => (Value::Ratio(clock.time(|| reduce_to_ratio::<S>(a))), false),
        Op::Fact => {
            let n = unsigned(op, a)?;
            let (r, overflowed) = clock.time(|| factorial::<S>(n));
            (Value::Number(r), overflowed)
        }
        Op::Round => (Value::Number(clock.time(|| round_even::<S>(a))), false),
        Op::Tobin => (Value::Decimal(clock.time(|| to_binary_point(a))), false),
        Op::Todec => (Value::Binary(clock.time(|| to_decimal_point(a))), false),
    };
    Ok(computed)
}

/// Evaluate `op` on raw operands under scale policy `S`
///
/// `b` must be given exactly when the operation takes two operands.
pub fn evaluate<S: Scale>(op: Op, a: i16, b: Option<i16>) -> Result<Outcome> {
    let b = match (op.arity(), b) {
        (2, None) => bail!("`{}` needs two operands", op.name()),
        (1, Some(_)) => bail!("`{}` takes one operand", op.name()),
        (_, b) => b.unwrap_or(0),
    };

    let mut clock = Stopwatch::default();
    let (result, overflow) = compute::<S>(op, a, b, &mut clock)?;

    let (left, right) = op.operands(a, b);
    let expression = match (op.symbol(), op.arity()) {
        (Some(sym), _) => format!("{}{}{}", left.render::<S>(), sym, right.render::<S>()),
        (None, 2) => format!("{}({},{})", op.name(), left.render::<S>(), right.render::<S>()),
        (None, _) => format!("{}({})", op.name(), left.render::<S>()),
    };

    Ok(Outcome {
        text: format!("{}={}", expression, result.render::<S>()),
        overflow,
        elapsed: clock.elapsed,
    })
}

/// Evaluate once and print the result line, then `overflow` if flagged
pub fn execute<S: Scale>(op: Op, a: i16, b: Option<i16>, show_time: bool) -> Result<()> {
    let outcome = evaluate::<S>(op, a, b)?;
    println!("{}", outcome.line(show_time));
    if outcome.overflow {
        println!("overflow");
    }
    Ok(())
}
