#[cfg(test)]
mod tests {
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use std::rc::Rc;

    use ecotrace::hooks::fetch_state::FetchState;
    use ecotrace::models::{
        community::{CommunityPost, CreatePostRequest, CreatePostResponse},
        consumption::{ConsumptionForm, TransportRow},
        context::{AqiLevel, AqiReading, ContextPolicy, ContextReport, Coord, Place, WeatherSnapshot},
        dashboard::{Dashboard, DashboardRecord},
        error::AppError,
        leaderboard::{Leaderboard, LeaderboardEntry},
        session::{Session, decode_user_claim},
    };
    use ecotrace::services::auth_api::check_passwords;

    // Helper function to build an unsigned JWT around a payload
    fn make_token(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload);
        format!("{header}.{body}.signature")
    }

    // Helper function to create a filled consumption form
    fn create_filled_form() -> ConsumptionForm {
        ConsumptionForm {
            transport: vec![TransportRow {
                distance: "15".to_string(),
                mode: "train".to_string(),
                minutes: "25".to_string(),
            }],
            previous_usage: "310".to_string(),
            today_usage: "11".to_string(),
            dry_waste: "1".to_string(),
            wet_waste: "2".to_string(),
        }
    }

    fn create_dashboard_records() -> Vec<DashboardRecord> {
        serde_json::from_str(
            r#"[
                {"date":"2024-01-02","totalCarbonFootprint":10},
                {"date":"2024-01-01","totalCarbonFootprint":8}
            ]"#,
        )
        .unwrap()
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
    }

    #[test]
    fn test_validation_error_displays_bare_message() {
        let error = AppError::Validation("Please fill in all fields.".to_string());
        assert_eq!(error.to_string(), "Please fill in all fields.");
    }

    // ===== Auth Flow Tests =====

    #[test]
    fn test_register_password_mismatch_blocks_before_network() {
        let err = check_passwords("secret", "secrets").unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match.");
    }

    #[test]
    fn test_login_token_with_claim_establishes_session() {
        let token = make_token(r#"{"userId":31,"sub":"dana@example.com"}"#);
        let session = Session::from_token(token).unwrap();
        assert_eq!(session.user_id, 31);
    }

    #[test]
    fn test_login_token_without_claim_is_rejected() {
        let token = make_token(r#"{"sub":"dana@example.com","exp":1893456000}"#);
        assert!(Session::from_token(token).is_err());
        // The decoded claim error names what was missing
        let token = make_token(r#"{"sub":"x"}"#);
        let err = decode_user_claim(&token).unwrap_err();
        assert!(err.to_string().contains("userId"));
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        assert!(decode_user_claim("only-one-segment").is_err());
        assert!(decode_user_claim("a.!!!not-base64!!!.c").is_err());
    }

    // ===== Submission Flow Tests =====

    #[test]
    fn test_missing_transport_fields_block_submission() {
        let mut form = create_filled_form();
        form.transport.push(TransportRow {
            distance: "4".to_string(),
            mode: String::new(),
            minutes: String::new(),
        });

        let err = form.validate(1, "Austin", "Dana").unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all fields.");
    }

    #[test]
    fn test_missing_waste_blocks_submission() {
        let mut form = create_filled_form();
        form.wet_waste = String::new();
        assert!(form.validate(1, "Austin", "Dana").is_err());
    }

    #[test]
    fn test_non_numeric_input_fails_explicitly() {
        let mut form = create_filled_form();
        form.today_usage = "eleven".to_string();

        let err = form.validate(1, "Austin", "Dana").unwrap_err();
        assert_eq!(err.to_string(), "Today's usage must be a whole number.");
    }

    #[test]
    fn test_submission_payload_matches_backend_contract() {
        let submission = create_filled_form().validate(31, "Austin", "Dana").unwrap();
        let json = serde_json::to_value(&submission).unwrap();

        assert_eq!(json["userId"], 31);
        assert_eq!(json["city"], "Austin");
        assert_eq!(json["name"], "Dana");
        assert_eq!(json["transportations"][0]["mode"], "train");
        assert_eq!(json["transportations"][0]["distance"], 15);
        assert_eq!(json["transportations"][0]["time"], 25);
        assert_eq!(json["wastages"][0]["wetWaste"], 2);
        assert_eq!(json["wastages"][0]["dryWaste"], 1);
        assert_eq!(json["prevWatts"], 310);
        assert_eq!(json["todayWatts"], 11);
    }

    // ===== Dashboard Tests =====

    #[test]
    fn test_chart_series_is_chronological() {
        let dashboard = Dashboard::new(create_dashboard_records());
        let (labels, values) = dashboard.series_data();

        assert_eq!(labels, vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(values, vec![8.0, 10.0]);
    }

    #[test]
    fn test_category_split_of_latest_total() {
        let records: Vec<DashboardRecord> = serde_json::from_str(
            r#"[
                {"date":"2024-01-03","totalCarbonFootprint":100},
                {"date":"2024-01-02","totalCarbonFootprint":55}
            ]"#,
        )
        .unwrap();

        let split = Dashboard::new(records).category_split().unwrap();
        assert_eq!(split.transportation, 50.0);
        assert_eq!(split.electricity, 30.0);
        assert_eq!(split.waste, 20.0);
        assert_eq!(
            split.transportation + split.electricity + split.waste,
            100.0
        );
    }

    // ===== Leaderboard Tests =====

    #[test]
    fn test_leaderboard_keeps_server_order_with_positional_ranks() {
        let entries: Vec<LeaderboardEntry> = serde_json::from_str(
            r#"[
                {"name":"A","city":"Austin","totalCarbonFootprint":30},
                {"name":"B","city":"Austin","totalCarbonFootprint":30},
                {"name":"C","city":"Austin","totalCarbonFootprint":45}
            ]"#,
        )
        .unwrap();

        let board = Leaderboard::new(entries);
        let ranked: Vec<(usize, &str)> = board
            .ranked()
            .map(|(rank, e)| (rank, e.name.as_str()))
            .collect();

        // Trusted as received: no re-sort even though C has the
        // largest total, and tied entries keep their order
        assert_eq!(ranked, vec![(1, "A"), (2, "B"), (3, "C")]);
    }

    // ===== Community Flow Tests =====

    #[test]
    fn test_created_post_is_prepended_from_server_echo() {
        let existing: Vec<CommunityPost> =
            serde_json::from_str(r#"[{"id":1,"userName":"B","content":"older"}]"#).unwrap();

        let response: CreatePostResponse =
            serde_json::from_str(r#"{"post":{"id":2,"userName":"A","content":"hi"}}"#).unwrap();

        let mut feed = vec![response.post];
        feed.extend(existing);

        assert_eq!(feed[0].user_name, "A");
        assert_eq!(feed[0].content, "hi");
        assert_eq!(feed[1].content, "older");
    }

    #[test]
    fn test_blank_post_is_rejected_locally() {
        assert!(CreatePostRequest::new(" \t ").is_err());
    }

    #[test]
    fn test_post_request_uses_fixed_title() {
        let request = CreatePostRequest::new("save the bees").unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["title"], "Environment");
        assert_eq!(json["content"], "save the bees");
    }

    // ===== Context Panel Tests =====

    fn create_weather_snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            coord: Coord {
                lat: 30.27,
                lon: -97.74,
            },
            temperature: 21.5,
            feels_like: 22.0,
            humidity: 40,
            pressure: 1013,
            wind_speed_kph: 12.6,
            wind_deg: 180,
            visibility_m: 10000,
            sunrise: None,
            sunset: None,
            description: "clear sky".to_string(),
        }
    }

    #[test]
    fn test_location_without_comma_is_rejected() {
        assert!("Austin".parse::<Place>().is_err());
        assert!("Austin Texas".parse::<Place>().is_err());
    }

    #[test]
    fn test_location_with_empty_part_is_rejected() {
        assert!("Austin,".parse::<Place>().is_err());
        assert!(", Texas".parse::<Place>().is_err());
    }

    #[test]
    fn test_location_parsing_trims_parts() {
        let place: Place = "  Austin ,  Texas ".parse().unwrap();
        assert_eq!(place.city, "Austin");
        assert_eq!(place.state, "Texas");
        assert_eq!(place.to_string(), "Austin, Texas");
    }

    #[test]
    fn test_partial_policy_shows_surviving_stages() {
        let report = ContextReport {
            weather: Some(create_weather_snapshot()),
            air_quality: Some(AqiReading { index: 2 }),
            headlines: vec![],
            videos: vec![],
            failures: vec!["videos: API error: quota exceeded".to_string()],
        };

        let data = report.into_data(ContextPolicy::ShowPartial);
        assert!(data.weather.is_some());
        assert_eq!(data.air_quality, Some(AqiReading { index: 2 }));
    }

    #[test]
    fn test_all_or_nothing_policy_discards_everything() {
        let report = ContextReport {
            weather: Some(create_weather_snapshot()),
            air_quality: Some(AqiReading { index: 2 }),
            headlines: vec![],
            videos: vec![],
            failures: vec!["videos: API error: quota exceeded".to_string()],
        };

        let data = report.into_data(ContextPolicy::AllOrNothing);
        assert!(data.weather.is_none());
        assert!(data.air_quality.is_none());
    }

    #[test]
    fn test_weather_failure_leaves_placeholder_report() {
        // The weather stage feeds the others; its failure means the
        // report carries nothing regardless of policy
        let report = ContextReport {
            failures: vec!["weather: Not found: city unknown".to_string()],
            ..ContextReport::default()
        };

        assert!(report.any_failed());
        let data = report.into_data(ContextPolicy::ShowPartial);
        assert!(data.weather.is_none());
        assert!(data.headlines.is_empty());
        assert!(data.videos.is_empty());
    }

    #[test]
    fn test_aqi_scale_labels() {
        assert_eq!(AqiLevel::from_index(1).label(), "Good");
        assert_eq!(AqiLevel::from_index(2).label(), "Fair");
        assert_eq!(AqiLevel::from_index(3).label(), "Moderate");
        assert_eq!(AqiLevel::from_index(4).label(), "Poor");
        assert_eq!(AqiLevel::from_index(5).label(), "Very Poor");
        assert_eq!(AqiLevel::from_index(7).label(), "Unknown");
    }

    // ===== FetchState Tests =====

    #[test]
    fn test_fetch_state_data_extraction() {
        let dashboard = Rc::new(Dashboard::new(create_dashboard_records()));
        let loaded = FetchState::Loaded(dashboard.clone());

        assert!(loaded.data().is_some());
        assert_eq!(loaded.data().unwrap(), &dashboard);

        let loading: FetchState<Dashboard> = FetchState::Loading;
        assert!(loading.is_loading());
        assert!(loading.data().is_none());

        let error: FetchState<Dashboard> = FetchState::Error("Test error".to_string());
        assert_eq!(error.error(), Some("Test error"));
    }

    #[test]
    fn test_fetch_state_equality() {
        let state1: FetchState<Dashboard> = FetchState::Loading;
        let state2: FetchState<Dashboard> = FetchState::Loading;
        assert_eq!(state1, state2);

        let state3: FetchState<Dashboard> = FetchState::Error("Test error".to_string());
        let state4: FetchState<Dashboard> = FetchState::Error("Test error".to_string());
        assert_eq!(state3, state4);
    }
}
