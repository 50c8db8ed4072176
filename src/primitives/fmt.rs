//! Formatting
//!
//! Unsigned values render their mathematical value: decimal digits only, no
//! sign, no leading zeros except the single digit of zero. The algorithm is
//! the same for all four widths; only the digit count differs.
//!
//! With the `speed` feature the decimal renderer emits two digits per
//! division using a lookup table. The output is identical.

use std::fmt::{
    Alignment, Binary, Debug, Display, Error, Formatter, LowerHex, Octal, Result, UpperHex, Write,
};

use super::{UInt8, UInt16, UInt32, UInt64};

/// Enough room for `u64::MAX`.
const MAX_DIGITS: usize = 20;

#[cfg(not(feature = "speed"))]
/// Writes the decimal digits of `value` at the end of `buf`, returning the
/// index of the first digit.
fn write_decimal(mut value: u64, buf: &mut [u8; MAX_DIGITS]) -> usize {
    let mut pos = MAX_DIGITS;

    loop {
        pos -= 1;
        buf[pos] = b'0' + (value % 10) as u8;
        value /= 10;

        if value == 0 {
            return pos;
        }
    }
}

#[cfg(feature = "speed")]
const DIGIT_PAIRS: &[u8; 200] = b"\
    0001020304050607080910111213141516171819\
    2021222324252627282930313233343536373839\
    4041424344454647484950515253545556575859\
    6061626364656667686970717273747576777879\
    8081828384858687888990919293949596979899";

#[cfg(feature = "speed")]
/// Writes the decimal digits of `value` at the end of `buf`, two at a time.
fn write_decimal(mut value: u64, buf: &mut [u8; MAX_DIGITS]) -> usize {
    let mut pos = MAX_DIGITS;

    while value >= 100 {
        let pair = (value % 100) as usize * 2;
        value /= 100;
        pos -= 2;
        buf[pos..pos + 2].copy_from_slice(&DIGIT_PAIRS[pair..pair + 2]);
    }

    if value >= 10 {
        let pair = value as usize * 2;
        pos -= 2;
        buf[pos..pos + 2].copy_from_slice(&DIGIT_PAIRS[pair..pair + 2]);
    } else {
        pos -= 1;
        buf[pos] = b'0' + value as u8;
    }

    pos
}

fn fmt_decimal(value: u64, f: &mut Formatter<'_>) -> Result {
    let mut buf = [0u8; MAX_DIGITS];
    let start = write_decimal(value, &mut buf);
    let digits = std::str::from_utf8(&buf[start..]).map_err(|_| Error)?;

    if f.sign_plus() {
        pad_unsigned(f, digits)
    } else {
        f.pad_integral(true, "", digits)
    }
}

/// Pads `digits` to the requested width without ever writing a sign.
///
/// `pad_integral` prints `+` under the `+` flag, so that flag takes this
/// path instead.
fn pad_unsigned(f: &mut Formatter<'_>, digits: &str) -> Result {
    let width = f.width().unwrap_or(0);

    if digits.len() >= width {
        return f.write_str(digits);
    }

    let padding = width - digits.len();

    if f.sign_aware_zero_pad() {
        for _ in 0..padding {
            f.write_char('0')?;
        }

        return f.write_str(digits);
    }

    let (before, after) = match f.align() {
        Some(Alignment::Left) => (0, padding),
        Some(Alignment::Center) => (padding / 2, padding.div_ceil(2)),
        Some(Alignment::Right) | None => (padding, 0),
    };
    let fill = f.fill();

    for _ in 0..before {
        f.write_char(fill)?;
    }
    f.write_str(digits)?;
    for _ in 0..after {
        f.write_char(fill)?;
    }

    Ok(())
}

macro_rules! unsigned_formatting {
    ($($Name:ident),*) => {
        $(
            /// Decimal rendering of the mathematical value.
            ///
            /// Width, fill and alignment flags are honored; a sign is never
            /// written.
            impl Display for $Name {
                fn fmt(&self, f: &mut Formatter<'_>) -> Result {
                    fmt_decimal(self.get() as u64, f)
                }
            }

            impl Debug for $Name {
                fn fmt(&self, f: &mut Formatter<'_>) -> Result {
                    Display::fmt(self, f)
                }
            }

            impl LowerHex for $Name {
                fn fmt(&self, f: &mut Formatter<'_>) -> Result {
                    LowerHex::fmt(&self.get(), f)
                }
            }

            impl UpperHex for $Name {
                fn fmt(&self, f: &mut Formatter<'_>) -> Result {
                    UpperHex::fmt(&self.get(), f)
                }
            }

            impl Octal for $Name {
                fn fmt(&self, f: &mut Formatter<'_>) -> Result {
                    Octal::fmt(&self.get(), f)
                }
            }

            impl Binary for $Name {
                fn fmt(&self, f: &mut Formatter<'_>) -> Result {
                    Binary::fmt(&self.get(), f)
                }
            }
        )*
    };
}

unsigned_formatting!(UInt8, UInt16, UInt32, UInt64);
