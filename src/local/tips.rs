//! Travel tips derived from a request

use crate::models::TravelRequest;

pub const SPRING_TIP: &str = "🌸 Spring travel: the weather changes quickly, bring a light jacket";
pub const SUMMER_TIP: &str = "☀️ Summer travel: use sun protection, stay hydrated and dress light";
pub const AUTUMN_TIP: &str = "🍂 Autumn travel: mild weather makes this a great season to go";
pub const WINTER_TIP: &str = "❄️ Winter travel: dress warmly and keep an eye on the forecast";

pub const SHORT_TRIP_TIP: &str =
    "⚡ Short trip: pick a nearby destination and plan your time carefully";
pub const LONG_TRIP_TIP: &str = "🎒 Long trip: plan in detail ahead of time and pack enough supplies";

pub const NATURE_TIP: &str = "🥾 Nature trip: wear comfortable hiking shoes and bring a camera";
pub const FOOD_TIP: &str = "🍽️ Food trip: read up on local dishes beforehand and keep an open mind";

pub const OFFLINE_MAPS_TIP: &str =
    "📱 Download offline maps before you leave and keep your phone charged";
pub const PAYMENT_TIP: &str = "💳 Carry both cash and cards, just in case";

/// Style tags that add a tip, in output order
const STYLE_TIPS: &[(&str, &str)] = &[("nature", NATURE_TIP), ("food", FOOD_TIP)];

/// Season tip for a 1-based month
#[must_use]
pub fn season_tip(month: u32) -> &'static str {
    match month {
        3..=5 => SPRING_TIP,
        6..=8 => SUMMER_TIP,
        9..=11 => AUTUMN_TIP,
        _ => WINTER_TIP,
    }
}

/// Tips for `request`: season, trip length, styles, then the universal ones
#[must_use]
pub fn travel_tips(request: &TravelRequest) -> Vec<String> {
    let mut tips = vec![season_tip(request.departure_month())];

    match request.duration {
        Some(length) if length.is_shortest() => tips.push(SHORT_TRIP_TIP),
        Some(length) if length.is_longest() => tips.push(LONG_TRIP_TIP),
        _ => {}
    }

    tips.extend(
        STYLE_TIPS
            .iter()
            .filter(|(style, _)| request.has_style(style))
            .map(|(_, tip)| *tip),
    );

    tips.push(OFFLINE_MAPS_TIP);
    tips.push(PAYMENT_TIP);

    tips.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TripLength;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn request(month: u32) -> TravelRequest {
        TravelRequest::new("Hangzhou", NaiveDate::from_ymd_opt(2025, month, 10).unwrap())
    }

    #[rstest]
    #[case(1, WINTER_TIP)]
    #[case(2, WINTER_TIP)]
    #[case(3, SPRING_TIP)]
    #[case(5, SPRING_TIP)]
    #[case(6, SUMMER_TIP)]
    #[case(8, SUMMER_TIP)]
    #[case(9, AUTUMN_TIP)]
    #[case(11, AUTUMN_TIP)]
    #[case(12, WINTER_TIP)]
    fn test_season_tip_by_month(#[case] month: u32, #[case] expected: &str) {
        assert_eq!(season_tip(month), expected);
        assert_eq!(travel_tips(&request(month))[0], expected);
    }

    #[rstest]
    #[case(TripLength::OneToTwoDays, Some(SHORT_TRIP_TIP))]
    #[case(TripLength::ThreeToFiveDays, None)]
    #[case(TripLength::SixToNineDays, None)]
    #[case(TripLength::TenOrMoreDays, Some(LONG_TRIP_TIP))]
    fn test_duration_tip(#[case] length: TripLength, #[case] expected: Option<&str>) {
        let tips = travel_tips(&request(4).with_duration(length));
        match expected {
            Some(tip) => assert_eq!(tips[1], tip),
            None => assert_eq!(tips.len(), 3),
        }
    }

    #[test]
    fn test_full_tip_order() {
        let request = request(7)
            .with_duration(TripLength::TenOrMoreDays)
            .with_style("food")
            .with_style("nature")
            .with_style("shopping");
        assert_eq!(
            travel_tips(&request),
            vec![
                SUMMER_TIP,
                LONG_TRIP_TIP,
                NATURE_TIP,
                FOOD_TIP,
                OFFLINE_MAPS_TIP,
                PAYMENT_TIP
            ]
        );
    }

    #[test]
    fn test_universal_tips_always_last() {
        let tips = travel_tips(&request(12));
        assert_eq!(tips, vec![WINTER_TIP, OFFLINE_MAPS_TIP, PAYMENT_TIP]);
    }
}
