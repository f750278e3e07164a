use crate::confirmation::{confirm, is_confirmed};

use googletest::prelude::*;

#[test]
fn given_yes_answers_when_checked_then_confirmed() {
    for answer in ["y\n", "Y", " yes ", "YES\r\n"] {
        assert_that!(is_confirmed(answer), is_true());
    }
}

#[test]
fn given_other_answers_when_checked_then_declined() {
    for answer in ["", "\n", "n", "no", "yep"] {
        assert_that!(is_confirmed(answer), is_false());
    }
}

#[test]
fn given_force_when_confirm_then_no_prompt_needed() {
    // When
    let result = confirm("Import everything?", true);

    // Then
    assert_that!(result.is_ok(), is_true());
}
