/// Ticket price at generation time: the performance's base price, or 1.5x
/// for a VIP seat, rounded up to the whole cent.
pub fn ticket_price_cents(base_price_cents: i64, is_vip: bool) -> i64 {
    if is_vip {
        (base_price_cents * 3 + 1) / 2
    } else {
        base_price_cents
    }
}

pub fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_seat_keeps_base_price() {
        assert_eq!(ticket_price_cents(10000, false), 10000);
        assert_eq!(ticket_price_cents(0, false), 0);
    }

    #[test]
    fn vip_seat_is_one_and_a_half_times_base() {
        assert_eq!(ticket_price_cents(10000, true), 15000);
        assert_eq!(ticket_price_cents(25000, true), 37500);
    }

    #[test]
    fn vip_half_cents_round_up() {
        assert_eq!(ticket_price_cents(101, true), 152);
        assert_eq!(ticket_price_cents(1, true), 2);
    }

    #[test]
    fn rounds_to_two_decimal_places() {
        assert_eq!(round_two_decimals(33.333333), 33.33);
        assert_eq!(round_two_decimals(66.666666), 66.67);
        assert_eq!(round_two_decimals(0.0), 0.0);
    }
}
