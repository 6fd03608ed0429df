use super::*;

fn ledger_at(balance: f64) -> Ledger {
    let mut ledger = Ledger::new();
    ledger
        .submit(Operation::Deposit, &balance.to_string())
        .expect("seed deposit");
    ledger
}

#[test]
fn new_display_shows_neutral_zero() {
    let display = BalanceDisplay::new();
    assert_eq!(display.text, "R$ 0.00");
    assert_eq!(display.tone, Tone::Neutral);
    assert_eq!(display, BalanceDisplay::default());
}

#[test]
fn display_formats_two_decimals_and_tone() {
    let positive = BalanceDisplay::for_balance(150.5);
    assert_eq!(positive.text, "R$ 150.50");
    assert_eq!(positive.tone, Tone::Positive);

    let negative = BalanceDisplay::for_balance(-20.0);
    assert_eq!(negative.text, "R$ -20.00");
    assert_eq!(negative.tone, Tone::Negative);
}

#[test]
fn display_update_replaces_text_and_tone() {
    let mut display = BalanceDisplay::new();
    display.update(70.0);
    assert_eq!(display.text, "R$ 70.00");
    assert_eq!(display.tone, Tone::Positive);

    display.update(0.0);
    assert_eq!(display, BalanceDisplay::new());
}

#[test]
fn format_balance_has_no_thousands_separator() {
    assert_eq!(format_balance(1234567.891), "R$ 1234567.89");
    assert_eq!(format_balance(0.004), "R$ 0.00");
    assert_eq!(format_balance(2.999), "R$ 3.00");
}

#[test]
fn parse_amount_accepts_numeric_text() {
    assert_eq!(parse_amount("100"), Ok(100.0));
    assert_eq!(parse_amount("12.5"), Ok(12.5));
    assert_eq!(parse_amount("-3"), Ok(-3.0));
    assert_eq!(parse_amount("1e3"), Ok(1000.0));
    assert_eq!(parse_amount(".5"), Ok(0.5));
}

#[test]
fn parse_amount_rejects_malformed_text() {
    for input in ["", "abc", "12.3.4", " 12", "12 ", "1,000", "R$ 10"] {
        let err = parse_amount(input).expect_err("should be rejected");
        assert_eq!(
            err,
            FynancialError::InvalidEntry {
                input: input.to_string()
            },
            "input {input:?} should carry the raw text"
        );
    }
}

#[test]
fn parse_amount_rejects_non_finite_values() {
    for input in ["NaN", "inf", "-infinity", "1e400"] {
        assert!(
            parse_amount(input).is_err(),
            "{input:?} would make the balance non-finite"
        );
    }
}

#[test]
fn parse_amount_rejects_hex_float_literals() {
    assert!(parse_amount("0x1p4").is_err());
    assert!(parse_amount("0x10").is_err());
}

#[test]
fn overflowing_result_is_rejected_and_balance_kept() {
    let mut ledger = Ledger::new();
    ledger.submit(Operation::Deposit, "1.7e308").expect("first deposit");

    let err = ledger
        .submit(Operation::Deposit, "1.7e308")
        .expect_err("sum overflows to infinity");
    assert_eq!(
        err,
        FynancialError::InvalidEntry {
            input: "1.7e308".to_string()
        }
    );
    assert_eq!(ledger.balance(), 1.7e308, "balance must stay finite");

    let back = ledger
        .submit(Operation::Withdraw, "1.7e308")
        .expect("withdraw still works");
    assert_eq!(back.balance, 0.0);
    assert_eq!(back.display, BalanceDisplay::new());

    ledger.submit(Operation::Withdraw, "1.7e308").expect("withdraw");
    assert!(ledger.submit(Operation::Withdraw, "1.7e308").is_err());
    assert_eq!(ledger.balance(), -1.7e308);
}

#[test]
fn invalid_entry_message_is_fixed() {
    let err = parse_amount("abc").expect_err("abc is not a number");
    assert_eq!(err.to_string(), "invalid entry: only unsigned numbers");
}

#[test]
fn deposit_adds_and_withdraw_subtracts() {
    let mut ledger = ledger_at(40.0);

    let deposit = ledger.submit(Operation::Deposit, "2.5").expect("deposit");
    assert_eq!(deposit.amount, 2.5);
    assert_eq!(deposit.balance, 42.5);
    assert_eq!(ledger.balance(), 42.5);

    let withdraw = ledger.submit(Operation::Withdraw, "50").expect("withdraw");
    assert_eq!(withdraw.operation, Operation::Withdraw);
    assert_eq!(withdraw.balance, -7.5);
    assert_eq!(withdraw.display.text, "R$ -7.50");
    assert_eq!(withdraw.display.tone, Tone::Negative);
}

#[test]
fn failed_submit_leaves_balance_untouched() {
    let mut ledger = ledger_at(12.0);

    for op in [Operation::Withdraw, Operation::Deposit] {
        assert!(ledger.submit(op, "12.3.4").is_err());
        assert!(ledger.submit(op, "").is_err());
        assert_eq!(ledger.balance(), 12.0, "{op} failure must not move balance");
    }
}

#[test]
fn withdrawing_negative_amount_increases_balance() {
    let mut ledger = Ledger::new();
    let result = ledger.submit(Operation::Withdraw, "-5").expect("withdraw");
    assert_eq!(result.balance, 5.0);
    assert_eq!(result.display.tone, Tone::Positive);
}

#[test]
fn depositing_zero_keeps_neutral_zero() {
    let mut ledger = Ledger::new();
    let result = ledger.submit(Operation::Deposit, "0").expect("deposit");
    assert_eq!(result.balance, 0.0);
    assert_eq!(result.display, BalanceDisplay::new());
}

#[test]
fn end_to_end_session() {
    let mut ledger = Ledger::new();
    assert_eq!(ledger.display(), BalanceDisplay::new());

    let step = ledger.submit(Operation::Deposit, "100").expect("deposit");
    assert_eq!(step.display.text, "R$ 100.00");
    assert_eq!(step.display.tone, Tone::Positive);

    let step = ledger.submit(Operation::Withdraw, "30").expect("withdraw");
    assert_eq!(step.display.text, "R$ 70.00");
    assert_eq!(step.display.tone, Tone::Positive);

    let step = ledger.submit(Operation::Withdraw, "100").expect("withdraw");
    assert_eq!(step.display.text, "R$ -30.00");
    assert_eq!(step.display.tone, Tone::Negative);

    assert!(ledger.submit(Operation::Deposit, "abc").is_err());
    assert_eq!(ledger.balance(), -30.0);
    assert_eq!(ledger.display().text, "R$ -30.00");
}

#[test]
fn operation_labels_and_placeholders() {
    assert_eq!(Operation::Withdraw.label(), "Withdraw");
    assert_eq!(Operation::Deposit.label(), "Deposit");
    assert_eq!(Operation::Withdraw.placeholder(), "amount to withdraw");
    assert_eq!(Operation::Deposit.placeholder(), "amount to deposit");
    assert_eq!(Operation::Deposit.to_string(), "Deposit");
}
