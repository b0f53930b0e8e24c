use anyhow::Result;
use chrono::{Duration, Utc};
use fest_results::domain::{Program, Student, StudentResult, StudentTotal, Team, TeamResult};
use fest_results::graphql::create_schema;
use fest_results::storage::InMemoryStore;
use std::sync::Arc;
use uuid::Uuid;

fn add_team(store: &InMemoryStore, name: &str, total_mark: Option<i64>) {
    let mut record = Team {
        id: None,
        name: name.to_string(),
        total_mark,
        created_at: Utc::now(),
    };
    store.create_team(&mut record);
}

fn add_student(store: &InMemoryStore, name: &str, class: &str, team: &str) -> Uuid {
    let mut record = Student {
        id: None,
        name: name.to_string(),
        class: class.to_string(),
        team: team.to_string(),
        created_at: Utc::now(),
    };
    store.create_student(&mut record);
    record.id.unwrap()
}

fn add_total(store: &InMemoryStore, student_id: Uuid, total_mark: Option<i64>, category: &str) {
    let mut record = StudentTotal {
        id: None,
        student_id: Some(student_id),
        total_mark,
        category: Some(category.to_string()),
        student: None,
        created_at: Utc::now(),
    };
    store.create_student_total(&mut record);
}

fn add_program(store: &InMemoryStore, name: &str, category: &str, age_hours: i64) -> Program {
    let mut record = Program {
        id: None,
        name: name.to_string(),
        category: category.to_string(),
        description: None,
        created_at: Utc::now() - Duration::hours(age_hours),
    };
    store.create_program(&mut record);
    record
}

fn add_result(
    store: &InMemoryStore,
    student_id: Uuid,
    program_id: Option<Uuid>,
    prize_place: Option<u32>,
    mark: Option<i64>,
    age_hours: i64,
) {
    let mut record = StudentResult {
        id: None,
        student_id: Some(student_id),
        program_id,
        prize_place,
        mark,
        marks: None,
        program: None,
        student: None,
        created_at: Utc::now() - Duration::hours(age_hours),
    };
    store.create_result(&mut record);
}

fn add_team_result(
    store: &InMemoryStore,
    team: &str,
    program_id: Option<Uuid>,
    prize_place: Option<u32>,
    mark: Option<i64>,
) {
    let mut record = TeamResult {
        id: None,
        team: team.to_string(),
        program_id,
        prize_place,
        mark,
        marks: None,
        created_at: Utc::now(),
    };
    store.create_team_result(&mut record);
}

#[tokio::test]
async fn team_standings_query_ranks_and_medals() -> Result<()> {
    let store = InMemoryStore::new();
    add_team(&store, "QUTNIYYA", Some(120));
    add_team(&store, "JIRAHIYYA", None);
    add_team(&store, "SWALAHIYYA", Some(90));

    let schema = create_schema(Arc::new(store));
    let response = schema
        .execute("{ teamStandings { name totalMark rank medalIcon medalLabel color } }")
        .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json()?;
    let standings = data["teamStandings"].as_array().unwrap();
    assert_eq!(standings.len(), 3);
    assert_eq!(standings[0]["name"], "QUTNIYYA");
    assert_eq!(standings[0]["rank"], 1);
    assert_eq!(standings[0]["medalIcon"], "\u{1F947}");
    assert_eq!(standings[0]["color"], "#FF5252");
    assert_eq!(standings[1]["name"], "SWALAHIYYA");
    assert_eq!(standings[2]["name"], "JIRAHIYYA");
    assert_eq!(standings[2]["totalMark"], 0);
    assert_eq!(standings[2]["medalLabel"], "3rd Place");
    Ok(())
}

#[tokio::test]
async fn category_leaderboard_query_returns_all_four_buckets() -> Result<()> {
    let store = InMemoryStore::new();
    let a = add_student(&store, "Asma", "9", "QUTNIYYA");
    let b = add_student(&store, "Bilal", "8", "JIRAHIYYA");
    add_total(&store, a, Some(40), "SENIOR");
    add_total(&store, b, Some(55), "senior");

    let schema = create_schema(Arc::new(store));
    let response = schema
        .execute("{ categoryLeaderboard { category entries { rank badge name team totalMark } } }")
        .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json()?;
    let boards = data["categoryLeaderboard"].as_array().unwrap();
    assert_eq!(boards.len(), 4);
    assert_eq!(boards[0]["category"], "Sub Junior");
    assert_eq!(boards[0]["entries"].as_array().unwrap().len(), 0);

    let senior = &boards[2];
    assert_eq!(senior["category"], "Senior");
    let entries = senior["entries"].as_array().unwrap();
    assert_eq!(entries[0]["name"], "Bilal");
    assert_eq!(entries[0]["rank"], 1);
    assert_eq!(entries[0]["badge"], "\u{1F947}");
    assert_eq!(entries[1]["name"], "Asma");
    Ok(())
}

#[tokio::test]
async fn programs_report_has_results_through_both_probes() -> Result<()> {
    let store = InMemoryStore::new();
    let s = add_student(&store, "Asma", "9", "QUTNIYYA");
    let judged = add_program(&store, "Qirath", "Senior", 3);
    let unjudged = add_program(&store, "Essay Writing", "Senior", 2);
    let team_event = add_program(&store, "Oppana", "General", 1);
    add_result(&store, s, judged.id, Some(1), Some(10), 1);
    add_result(&store, s, unjudged.id, None, None, 1);
    add_team_result(&store, "QUTNIYYA", team_event.id, Some(1), Some(10));

    let schema = create_schema(Arc::new(store));
    let response = schema
        .execute("{ programs { name hasResults categoryColor } }")
        .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json()?;
    let programs = data["programs"].as_array().unwrap();
    assert_eq!(programs.len(), 3);
    // newest first
    assert_eq!(programs[0]["name"], "Oppana");
    assert_eq!(programs[0]["hasResults"], true);
    assert_eq!(programs[0]["categoryColor"], "#f59e0b");
    assert_eq!(programs[1]["name"], "Essay Writing");
    assert_eq!(programs[1]["hasResults"], false);
    assert_eq!(programs[2]["name"], "Qirath");
    assert_eq!(programs[2]["hasResults"], true);
    Ok(())
}

#[tokio::test]
async fn programs_query_filters_by_category_and_search() -> Result<()> {
    let store = InMemoryStore::new();
    add_program(&store, "Qirath", "Senior", 3);
    add_program(&store, "Quiz", "Junior", 2);
    add_program(&store, "Essay Writing", "Senior", 1);

    let schema = create_schema(Arc::new(store));
    let response = schema
        .execute(r#"{ programs(category: "Senior", search: "qir") { name } }"#)
        .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json()?;
    let programs = data["programs"].as_array().unwrap();
    assert_eq!(programs.len(), 1);
    assert_eq!(programs[0]["name"], "Qirath");
    Ok(())
}

#[tokio::test]
async fn program_results_switch_between_team_and_student_rows() -> Result<()> {
    let store = InMemoryStore::new();
    let s = add_student(&store, "Asma", "9", "QUTNIYYA");

    let qirath = add_program(&store, "Qirath", "Senior", 2);
    let oppana = add_program(&store, "Oppana", "General", 1);
    add_result(&store, s, qirath.id, Some(1), Some(10), 1);
    add_team_result(&store, "JIRAHIYYA", oppana.id, Some(2), Some(8));
    add_team_result(&store, "QUTNIYYA", oppana.id, Some(1), Some(12));

    let schema = create_schema(Arc::new(store));

    let query = format!(
        r#"{{ programResults(programId: "{}") {{ name rankLabel markLabel }} }}"#,
        oppana.id.unwrap()
    );
    let response = schema.execute(&query).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json()?;
    let rows = data["programResults"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "QUTNIYYA");
    assert_eq!(rows[0]["rankLabel"], "#1");
    assert_eq!(rows[1]["name"], "JIRAHIYYA");
    assert_eq!(rows[1]["markLabel"], "Marks: 8");

    let query = format!(
        r#"{{ programResults(programId: "{}") {{ name placementLabel }} }}"#,
        qirath.id.unwrap()
    );
    let response = schema.execute(&query).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json()?;
    let rows = data["programResults"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Asma");
    assert_eq!(rows[0]["placementLabel"], "Place: 1");
    Ok(())
}

#[tokio::test]
async fn student_profile_recomputes_the_mark_sheet() -> Result<()> {
    let store = InMemoryStore::new();
    let s = add_student(&store, "Asma", "9", "QUTNIYYA");
    add_total(&store, s, Some(500), "SENIOR");

    let qirath = add_program(&store, "Qirath", "Senior", 5);
    let essay = add_program(&store, "Essay Writing", "Senior", 4);
    add_result(&store, s, qirath.id, Some(1), Some(10), 3);
    add_result(&store, s, essay.id, None, None, 1);

    let schema = create_schema(Arc::new(store));
    let query = format!(
        r#"{{ student(id: "{}") {{
            student {{ name teamColor }}
            markSheet {{ program prize mark }}
            totalMarks
            programCount
            category
        }} }}"#,
        s
    );
    let response = schema.execute(&query).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json()?;
    let profile = &data["student"];
    assert_eq!(profile["student"]["name"], "Asma");
    assert_eq!(profile["student"]["teamColor"], "#FF5252");
    assert_eq!(profile["totalMarks"], 10);
    assert_eq!(profile["programCount"], 2);
    assert_eq!(profile["category"], "SENIOR");

    let sheet = profile["markSheet"].as_array().unwrap();
    assert_eq!(sheet[0]["program"], "Qirath");
    assert_eq!(sheet[0]["prize"], "1st Prize");
    assert_eq!(sheet[1]["prize"], "-");
    assert_eq!(sheet[1]["mark"], 0);
    Ok(())
}

#[tokio::test]
async fn unknown_student_resolves_to_null() -> Result<()> {
    let store = InMemoryStore::new();
    let schema = create_schema(Arc::new(store));

    let query = format!(r#"{{ student(id: "{}") {{ totalMarks }} }}"#, Uuid::new_v4());
    let response = schema.execute(&query).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json()?;
    assert!(data["student"].is_null());
    Ok(())
}

#[tokio::test]
async fn students_query_defaults_to_the_first_team_tab() -> Result<()> {
    let store = InMemoryStore::new();
    add_student(&store, "Asma", "9", "Qutniyya");
    add_student(&store, "Bilal", "8", "QUTNIYYA");
    add_student(&store, "Chand", "7", "JIRAHIYYA");

    let schema = create_schema(Arc::new(store));

    let response = schema.execute("{ students { name } }").await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json()?;
    let names: Vec<&str> = data["students"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Asma", "Bilal"]);

    let response = schema
        .execute(r#"{ students(team: "jirahiyya") { name } }"#)
        .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json()?;
    let names: Vec<&str> = data["students"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Chand"]);
    Ok(())
}

#[tokio::test]
async fn catalog_chips_count_programs_per_category() -> Result<()> {
    let store = InMemoryStore::new();
    add_program(&store, "Qirath", "Senior", 4);
    add_program(&store, "Essay Writing", "Senior", 3);
    add_program(&store, "Quiz", "Junior", 2);
    add_program(&store, "Oppana", "General", 1);

    let schema = create_schema(Arc::new(store));
    let response = schema.execute("{ catalogChips { label count color } }").await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json()?;
    let chips = data["catalogChips"].as_array().unwrap();
    assert_eq!(chips.len(), 6);
    assert_eq!(chips[0]["label"], "All");
    assert_eq!(chips[0]["count"], 4);

    let senior = chips.iter().find(|c| c["label"] == "Senior").unwrap();
    assert_eq!(senior["count"], 2);
    let sub_junior = chips.iter().find(|c| c["label"] == "Sub Junior").unwrap();
    assert_eq!(sub_junior["count"], 0);
    Ok(())
}

#[tokio::test]
async fn malformed_ids_surface_as_errors() -> Result<()> {
    let store = InMemoryStore::new();
    let schema = create_schema(Arc::new(store));

    let response = schema
        .execute(r#"{ student(id: "not-a-uuid") { totalMarks } }"#)
        .await;
    assert!(!response.errors.is_empty());
    Ok(())
}
