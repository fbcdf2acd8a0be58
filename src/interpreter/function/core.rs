use std::fmt;

use crate::{
    error::{EvalResult, SemanticError},
    host::Host,
    interpreter::{
        function::{builtin, fact, help, min_max, print, round},
        value::core::{Operand, Value},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives its evaluated arguments and the host it may print to.
/// It returns `Some(value)` for a result or `None` when it only has side
/// effects.
pub type BuiltinFn = fn(&[Operand], &mut dyn Host) -> EvalResult<Option<Value>>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
/// - `Variadic` accepts any count, including none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    Variadic,
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// # Example
    /// ```
    /// use classhub::interpreter::function::core::Arity;
    ///
    /// assert!(Arity::Exact(2).check(2));
    /// assert!(!Arity::OneOf(&[0, 1]).check(2));
    /// assert!(Arity::Variadic.check(7));
    /// ```
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
            Self::Variadic => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::OneOf(counts) => {
                let counts = counts.iter().map(ToString::to_string).collect::<Vec<_>>();
                f.write_str(&counts.join(" or "))
            },
            Self::Variadic => f.write_str("any number of"),
        }
    }
}

/// Describes one builtin function.
///
/// Descriptors live in a static table, so a `&'static Builtin` is a stable
/// identity: a function reference carries its own registered name, which is
/// what `help(sqrt)` reports on.
pub struct Builtin {
    /// The name the function is called by.
    pub name:        &'static str,
    /// How many arguments the function accepts.
    pub arity:       Arity,
    /// The one-line description shown by `help`.
    pub description: &'static str,
    func:            BuiltinFn,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Builtin {
    /// Checks the argument count and invokes the function.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` if the arity does not allow `args.len()`.
    /// - Whatever the implementation itself raises.
    pub fn call(&'static self, args: &[Operand], host: &mut dyn Host) -> EvalResult<Operand> {
        if !self.arity.check(args.len()) {
            return Err(SemanticError::ArgumentCountMismatch { name:     self.name.to_string(),
                                                              expected: self.arity,
                                                              found:    args.len(), }.into());
        }

        tracing::trace!(name = self.name, argc = args.len(), "calling builtin");

        Ok((self.func)(args, host)?.map_or(Operand::Nothing(self), Operand::Value))
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin,
/// - the help text.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr,
                help: $help:literal $(,)?
            }
        ),* $(,)?
    ) => {
        pub(crate) static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, description: $help, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "round" => {
        arity: Arity::Exact(1), func: round::round,
        help: "round(x): Rounds x to the nearest integer.",
    },
    "roundToDecimalPlace" => {
        arity: Arity::Exact(2), func: round::round_to_decimal_place,
        help: "roundToDecimalPlace(x, d): Rounds x to d decimal places.",
    },
    "sprt" => {
        arity: Arity::Exact(1), func: builtin::sqrt,
        help: "sprt(x) or sqrt(x): Returns the square root of x.",
    },
    "sqrt" => {
        arity: Arity::Exact(1), func: builtin::sqrt,
        help: "sqrt(x): Returns the square root of x.",
    },
    "pow" => {
        arity: Arity::Exact(2), func: builtin::pow,
        help: "pow(x, y): Returns x raised to the power of y.",
    },
    "sin" => {
        arity: Arity::Exact(1), func: builtin::sin,
        help: "sin(x): Returns the sine of x (in radians).",
    },
    "cos" => {
        arity: Arity::Exact(1), func: builtin::cos,
        help: "cos(x): Returns the cosine of x (in radians).",
    },
    "tan" => {
        arity: Arity::Exact(1), func: builtin::tan,
        help: "tan(x): Returns the tangent of x (in radians).",
    },
    "abs" => {
        arity: Arity::Exact(1), func: builtin::abs,
        help: "abs(x): Returns the absolute value of x.",
    },
    "floor" => {
        arity: Arity::Exact(1), func: builtin::floor,
        help: "floor(x): Returns the largest integer ≤ x.",
    },
    "ceil" => {
        arity: Arity::Exact(1), func: builtin::ceil,
        help: "ceil(x): Returns the smallest integer ≥ x.",
    },
    "exp" => {
        arity: Arity::Exact(1), func: builtin::exp,
        help: "exp(x): Returns e raised to the power of x.",
    },
    "log" => {
        arity: Arity::Exact(1), func: builtin::ln,
        help: "log(x): Returns the natural logarithm of x.",
    },
    "log10" => {
        arity: Arity::Exact(1), func: builtin::log10,
        help: "log10(x): Returns the base-10 logarithm of x.",
    },
    "max" => {
        arity: Arity::Variadic, func: min_max::max,
        help: "max(x, y, ...): Returns the largest of the provided values.",
    },
    "min" => {
        arity: Arity::Variadic, func: min_max::min,
        help: "min(x, y, ...): Returns the smallest of the provided values.",
    },
    "asin" => {
        arity: Arity::Exact(1), func: builtin::asin,
        help: "asin(x): Returns the arcsine of x (in radians).",
    },
    "acos" => {
        arity: Arity::Exact(1), func: builtin::acos,
        help: "acos(x): Returns the arccosine of x (in radians).",
    },
    "atan" => {
        arity: Arity::Exact(1), func: builtin::atan,
        help: "atan(x): Returns the arctangent of x (in radians).",
    },
    "rand" => {
        arity: Arity::Exact(0), func: builtin::rand,
        help: "rand(): Returns a random number between 0 and 1.",
    },
    "cbrt" => {
        arity: Arity::Exact(1), func: builtin::cbrt,
        help: "cbrt(x): Returns the cube root of x.",
    },
    "fact" => {
        arity: Arity::Exact(1), func: fact::fact,
        help: "fact(n): Returns the factorial of n.",
    },
    "help" => {
        arity: Arity::OneOf(&[0, 1]), func: help::help,
        help: "help(): Lists available functions. help(func) or help('funcName'): Shows help for that function.",
    },
    "clear" => {
        arity: Arity::Exact(0), func: print::clear,
        help: "clear(): Clears the console output.",
    },
    "print" => {
        arity: Arity::Variadic, func: print::print,
        help: "print(...args): Prints the provided arguments to the console.",
    },
    "version" => {
        arity: Arity::Exact(0), func: print::version,
        help: "version(): Prints the version number.",
    },
}

/// Looks a builtin up by name.
///
/// # Example
/// ```
/// use classhub::interpreter::function::core::{Arity, lookup};
///
/// let sqrt = lookup("sqrt").unwrap();
/// assert_eq!(sqrt.arity, Arity::Exact(1));
/// assert!(lookup("foo").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTIN_TABLE.iter().find(|b| b.name == name)
}

/// Returns every builtin in registration order.
#[must_use]
pub fn builtins() -> &'static [Builtin] {
    BUILTIN_TABLE
}

/// Evaluates the `index`th argument as a number.
///
/// Strings are coerced; function references and empty results are errors.
pub(crate) fn number_arg(args: &[Operand], index: usize) -> EvalResult<f64> {
    Ok(args[index].as_value()?.to_number())
}
