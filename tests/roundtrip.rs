//! Serialize/deserialize round-trip property: any valid message value must
//! decode back equal to itself.

use aifa_proto::common::v1::Money;
use aifa_proto::education::v1::{Course, Lesson};
use aifa_proto::metrics::v1::MetricPoint;
use aifa_proto::payment::v1::{PaymentRecord, TaxInfo};
use aifa_proto::signals::v1::{Signal, SignalExit};
use aifa_proto::user::v1::User;
use prost::Message;
use prost_types::Timestamp;
use proptest::prelude::*;

prop_compose! {
    fn arb_timestamp()(
        seconds in -62_135_596_800_i64..253_402_300_800,
        nanos in 0_i32..1_000_000_000,
    ) -> Timestamp {
        Timestamp { seconds, nanos }
    }
}

prop_compose! {
    fn arb_money()(
        currency_code in "[A-Z]{3}",
        units in -1_000_000_000_i64..1_000_000_000,
        nanos in -999_999_999_i32..1_000_000_000,
    ) -> Money {
        Money { currency_code, units, nanos }
    }
}

prop_compose! {
    fn arb_exit()(
        exit_price in 0.01_f64..100_000.0,
        exited_at in proptest::option::of(arb_timestamp()),
        pnl_percentage in -100.0_f64..1_000.0,
    ) -> SignalExit {
        SignalExit { exit_price, exited_at, pnl_percentage }
    }
}

prop_compose! {
    fn arb_signal()(
        signal_id in "[A-Z]{2,5}_[A-Z]{1,6}_[0-9]{8}",
        symbol in "[A-Z]{1,6}",
        enums in (0_i32..=4, 0_i32..=4, 0_i32..=2, 0_i32..=3, 0_i32..=3),
        prices in (0.01_f64..100_000.0, 0.01_f64..100_000.0, 0.01_f64..100_000.0, 0.1_f64..10.0),
        confidence_score in 1_i32..=10,
        timeframe in "[a-z0-9 -]{0,12}",
        analysis in "[ -~]{0,64}",
        created_at in proptest::option::of(arb_timestamp()),
        exit in proptest::option::of(arb_exit()),
    ) -> Signal {
        let (asset_class, kind, action, status, tier_access) = enums;
        let (entry_price, stop_loss, target_price, risk_reward_ratio) = prices;
        Signal {
            signal_id,
            symbol,
            asset_class,
            kind,
            action,
            entry_price,
            stop_loss,
            target_price,
            risk_reward_ratio,
            confidence_score,
            timeframe,
            analysis,
            status,
            tier_access,
            created_at,
            exit,
        }
    }
}

prop_compose! {
    fn arb_tax()(
        tax_type in 0_i32..=4,
        rate_basis_points in 0_i32..=5_000,
        amount in proptest::option::of(arb_money()),
        jurisdiction in "[A-Z]{2}(-[A-Z]{2})?",
    ) -> TaxInfo {
        TaxInfo { tax_type, rate_basis_points, amount, jurisdiction }
    }
}

prop_compose! {
    fn arb_payment_record()(
        payment_id in "[a-z0-9]{8,16}",
        amount in proptest::option::of(arb_money()),
        enums in (0_i32..=4, 0_i32..=2),
        external_payment_id in "(pi|pay)_[a-zA-Z0-9]{8,16}",
        invoice_number in "INV-[0-9]{6}",
        tax in proptest::option::of(arb_tax()),
        fees in proptest::option::of(arb_money()),
        processed_at in proptest::option::of(arb_timestamp()),
        created_at in proptest::option::of(arb_timestamp()),
    ) -> PaymentRecord {
        let (status, provider) = enums;
        PaymentRecord {
            payment_id,
            amount,
            status,
            provider,
            external_payment_id,
            invoice_number,
            tax,
            fees,
            processed_at,
            created_at,
        }
    }
}

prop_compose! {
    fn arb_user()(
        user_id in "[a-z0-9-]{8,16}",
        email in "[a-z]{1,8}@[a-z]{1,6}\\.com",
        display_name in "[ -~]{0,24}",
        contacts in ("[0-9]{0,12}", "(\\+[0-9]{8,13})?"),
        tier in 0_i32..=3,
        channels in proptest::collection::vec(0_i32..=5, 0..4),
        status in 0_i32..=3,
        created_at in proptest::option::of(arb_timestamp()),
    ) -> User {
        let (telegram_chat_id, whatsapp_number) = contacts;
        User {
            user_id,
            email,
            display_name,
            telegram_chat_id,
            whatsapp_number,
            tier,
            channels,
            status,
            created_at,
        }
    }
}

prop_compose! {
    fn arb_lesson()(
        lesson_id in "[a-z0-9-]{4,12}",
        title in "[ -~]{1,32}",
        body_markdown in "[ -~]{0,128}",
        duration_minutes in 0_i32..=600,
        position in 1_i32..=50,
    ) -> Lesson {
        Lesson { lesson_id, title, body_markdown, duration_minutes, position }
    }
}

prop_compose! {
    fn arb_course()(
        course_id in "[a-z0-9-]{4,12}",
        title in "[ -~]{1,32}",
        description in "[ -~]{0,64}",
        level in 0_i32..=3,
        tier_access in 0_i32..=3,
        lessons in proptest::collection::vec(arb_lesson(), 0..4),
        created_at in proptest::option::of(arb_timestamp()),
    ) -> Course {
        Course { course_id, title, description, level, tier_access, lessons, created_at }
    }
}

prop_compose! {
    fn arb_metric_point()(
        name in "[a-z.]{1,24}",
        value in -1e12_f64..1e12,
        labels in proptest::collection::hash_map("[a-z]{1,8}", "[a-z0-9]{0,8}", 0..4),
        recorded_at in proptest::option::of(arb_timestamp()),
    ) -> MetricPoint {
        MetricPoint { name, value, labels, recorded_at }
    }
}

proptest! {
    #[test]
    fn money_round_trips(money in arb_money()) {
        let decoded = Money::decode(money.encode_to_vec().as_slice()).unwrap();
        prop_assert_eq!(money, decoded);
    }

    #[test]
    fn signal_round_trips(signal in arb_signal()) {
        let decoded = Signal::decode(signal.encode_to_vec().as_slice()).unwrap();
        prop_assert_eq!(signal, decoded);
    }

    #[test]
    fn payment_record_round_trips(record in arb_payment_record()) {
        let decoded = PaymentRecord::decode(record.encode_to_vec().as_slice()).unwrap();
        prop_assert_eq!(record, decoded);
    }

    #[test]
    fn user_round_trips(user in arb_user()) {
        let decoded = User::decode(user.encode_to_vec().as_slice()).unwrap();
        prop_assert_eq!(user, decoded);
    }

    #[test]
    fn course_round_trips(course in arb_course()) {
        let decoded = Course::decode(course.encode_to_vec().as_slice()).unwrap();
        prop_assert_eq!(course, decoded);
    }

    #[test]
    fn metric_point_round_trips(point in arb_metric_point()) {
        let decoded = MetricPoint::decode(point.encode_to_vec().as_slice()).unwrap();
        prop_assert_eq!(point, decoded);
    }
}
