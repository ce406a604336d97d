use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::digit1,
    combinator::{opt, recognize, rest},
    multi::many0,
    sequence::{pair, terminated},
    IResult,
};

/// Separator between an account name and its sub-ledger detail, e.g. "Trade and other payables - Supplier X"
const DETAIL_SEPARATOR: &str = " - ";

#[derive(Debug, PartialEq, Eq)]
pub struct AccountLabel<'a> {
    pub code: Option<&'a str>,
    pub name: &'a str,
}

/// Splits a ledger account label like "1000 Cash" or "1.2.3 Fixtures" into code and name.
///
/// Grammar: `label := [code whitespace+] name` with `code := digit+ ("." digit+)*`.
/// A label without a numeric prefix followed by whitespace has no code and the whole label
/// is the name.
pub fn parse_account_code(label: &str) -> AccountLabel<'_> {
    match account_label(label) {
        Ok((_, (code, name))) => AccountLabel { code, name },
        Err(_) => AccountLabel {
            code: None,
            name: label,
        },
    }
}

fn account_label(input: &str) -> IResult<&str, (Option<&str>, &str)> {
    pair(
        opt(terminated(account_code, take_while1(char::is_whitespace))),
        rest,
    )(input)
}

fn account_code(input: &str) -> IResult<&str, &str> {
    recognize(pair(digit1, many0(pair(tag("."), digit1))))(input)
}

/// Collapses sub-ledger detail of accounts starting with `prefix`, so that
/// "Trade and other payables - Supplier X" becomes "Trade and other payables".
/// Only the first " - " counts, and only if something follows it.
pub fn strip_payables_suffix<'a>(name: &'a str, prefix: &str) -> &'a str {
    if !name.starts_with(prefix) {
        return name;
    }
    match name.find(DETAIL_SEPARATOR) {
        Some(index) if index + DETAIL_SEPARATOR.len() < name.len() => &name[..index],
        _ => name,
    }
}
