use crate::console::{Entry, InputError, parse_triple};

#[test]
fn parses_three_integers() {
    assert_eq!(
        parse_triple("1 0 5\n"),
        Ok(Entry::Process {
            id: 1,
            arrival: 0,
            burst: 5
        })
    );
    assert_eq!(
        parse_triple("  -3\t2   7 "),
        Ok(Entry::Process {
            id: -3,
            arrival: 2,
            burst: 7
        })
    );
}

#[test]
fn only_all_zero_is_the_sentinel() {
    assert_eq!(parse_triple("0 0 0"), Ok(Entry::End));
    assert_eq!(
        parse_triple("0 1 -1"),
        Ok(Entry::Process {
            id: 0,
            arrival: 1,
            burst: -1
        })
    );
}

#[test]
fn rejects_wrong_token_count() {
    assert_eq!(parse_triple("1 2"), Err(InputError::WrongArity(2)));
    assert_eq!(parse_triple("1 2 3 4"), Err(InputError::WrongArity(4)));
    assert_eq!(parse_triple(""), Err(InputError::WrongArity(0)));
}

#[test]
fn rejects_non_integer_tokens() {
    assert_eq!(
        parse_triple("1 x 3"),
        Err(InputError::NotAnInteger("x".to_string()))
    );
    assert_eq!(
        parse_triple("1 2 3.5"),
        Err(InputError::NotAnInteger("3.5".to_string()))
    );
}
