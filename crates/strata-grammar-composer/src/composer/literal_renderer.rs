// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Renders scalar literal values and multiplicities.
//! Pure translation - no logic beyond the style and flag rules.

use super::context::RenderContext;
use crate::escape;
use num::BigInt;
use strata_model::Multiplicity;

/// Literal prefix marker carried by date and time literals
const DATE_PREFIX: char = '%';

/// The "latest date" token
const LATEST_DATE: &str = "%latest";

/// Render a string literal: quoted and escaped, or raw in
/// parameter-value mode.
pub fn render_string(value: &str, ctx: &RenderContext) -> String {
    if ctx.is_parameter_value() {
        value.to_string()
    } else {
        escape::convert_string(value, true)
    }
}

pub fn render_integer(value: &BigInt) -> String {
    value.to_string()
}

/// Render a float literal. Uses the debug form so a fractionless value
/// keeps its `.0` and re-lexes as a float.
pub fn render_float(value: f64) -> String {
    format!("{:?}", value)
}

/// Render a decimal literal with its `D` suffix.
pub fn render_decimal(value: &str) -> String {
    format!("{}D", value)
}

pub fn render_boolean(value: bool) -> String {
    value.to_string()
}

/// Render a date or date-time literal. The grammar requires the prefix
/// marker; prepend it when the stored value lacks one. Parameter-value
/// mode strips the marker instead.
pub fn render_date(value: &str, ctx: &RenderContext) -> String {
    if ctx.is_parameter_value() {
        value.strip_prefix(DATE_PREFIX).unwrap_or(value).to_string()
    } else if value.starts_with(DATE_PREFIX) {
        value.to_string()
    } else {
        format!("{}{}", DATE_PREFIX, value)
    }
}

/// Render a time-only literal. As `render_date`, plus parameter-value
/// mode drops a trailing zero-fraction (`10:00:00.0` -> `10:00:00`).
pub fn render_strict_time(value: &str, ctx: &RenderContext) -> String {
    let rendered = render_date(value, ctx);
    if ctx.is_parameter_value() {
        rendered
            .strip_suffix(".0")
            .map(str::to_string)
            .unwrap_or(rendered)
    } else {
        rendered
    }
}

pub fn render_latest_date() -> String {
    LATEST_DATE.to_string()
}

/// Render a multiplicity to its bare textual form (callers supply the
/// surrounding brackets): `*` for zero-to-many, `N` for an exact bound,
/// `lower..upper` otherwise.
pub fn render_multiplicity(multiplicity: &Multiplicity) -> String {
    match (multiplicity.lower, multiplicity.upper) {
        (0, None) => "*".to_string(),
        (lower, Some(upper)) if lower == upper => lower.to_string(),
        (lower, Some(upper)) => format!("{}..{}", lower, upper),
        (lower, None) => format!("{}..*", lower),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::context::RenderStyle;

    fn ctx() -> RenderContext {
        RenderContext::new(RenderStyle::Standard)
    }

    #[test]
    fn multiplicity_forms() {
        assert_eq!(render_multiplicity(&Multiplicity::ZERO_MANY), "*");
        assert_eq!(render_multiplicity(&Multiplicity::ONE), "1");
        assert_eq!(render_multiplicity(&Multiplicity::between(2, 5)), "2..5");
        assert_eq!(render_multiplicity(&Multiplicity::ZERO_ONE), "0..1");
        assert_eq!(render_multiplicity(&Multiplicity::at_least(1)), "1..*");
    }

    #[test]
    fn strings_quote_by_default() {
        assert_eq!(render_string("it's", &ctx()), "'it\\'s'");
    }

    #[test]
    fn strings_raw_in_parameter_value_mode() {
        let ctx = ctx().with_parameter_value(true);
        assert_eq!(render_string("it's", &ctx), "it's");
    }

    #[test]
    fn dates_gain_their_prefix_once() {
        assert_eq!(render_date("2023-01-01", &ctx()), "%2023-01-01");
        assert_eq!(render_date("%2023-01-01", &ctx()), "%2023-01-01");
    }

    #[test]
    fn dates_lose_their_prefix_as_parameter_values() {
        let ctx = ctx().with_parameter_value(true);
        assert_eq!(render_date("%2023-01-01", &ctx), "2023-01-01");
    }

    #[test]
    fn strict_time_zero_fraction_normalization() {
        let pv_ctx = ctx().with_parameter_value(true);
        assert_eq!(render_strict_time("%10:00:00.0", &pv_ctx), "10:00:00");
        assert_eq!(render_strict_time("10:00:00", &ctx()), "%10:00:00");
    }

    #[test]
    fn floats_keep_their_point() {
        assert_eq!(render_float(1.0), "1.0");
        assert_eq!(render_float(2.5), "2.5");
    }

    #[test]
    fn decimals_carry_the_suffix() {
        assert_eq!(render_decimal("3.14"), "3.14D");
    }
}
