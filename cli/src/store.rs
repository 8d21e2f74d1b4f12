// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{collections::HashSet, error::Error, path::Path, str::FromStr};

use calendarun_core::{
    Calendar, CalendarError, CalendarId, ScheduleSpan, schedules_on, sort_schedules,
};
use jiff::civil::Date;
use tokio::fs;

/// Calendars and schedules loaded from a TOML file.
///
/// ```toml
/// [[calendars]]
/// id = 1
/// name = "School"
/// slices = [{ name = "Spring", start = "2024-02-26", end = "2024-06-30" }]
///
/// [[schedules]]
/// id = 1
/// name = "Trip"
/// start = "2024-04-10"
/// end = "2024-04-16"
/// color = "#3366FF"
/// calendar = 1
/// ```
#[derive(Debug, Default, Clone)]
pub struct ScheduleStore {
    calendars: Vec<Calendar>,
    schedules: Vec<ScheduleSpan>,
}

#[derive(Debug, serde::Deserialize)]
struct ScheduleFile {
    #[serde(default)]
    calendars: Vec<Calendar>,
    #[serde(default)]
    schedules: Vec<ScheduleSpan>,
}

impl ScheduleStore {
    /// Reads the schedule file at `path`.
    #[tracing::instrument]
    pub async fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let store = fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read schedules at {}: {}", path.display(), e))?
            .parse::<Self>()
            .map_err(|e| format!("Failed to parse schedules at {}: {}", path.display(), e))?;

        tracing::debug!(
            calendars = store.calendars.len(),
            schedules = store.schedules.len(),
            "loaded schedules"
        );
        Ok(store)
    }

    /// Number of stored schedules.
    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    /// The declared calendar with the given id.
    pub fn calendar(&self, id: CalendarId) -> Option<&Calendar> {
        self.calendars.iter().find(|a| a.id() == id)
    }

    /// Schedules sharing at least one day with `[from, to]`, in layout order.
    ///
    /// With a `calendar` filter, only schedules of that calendar are kept.
    pub fn in_range(
        &self,
        from: Date,
        to: Date,
        calendar: Option<CalendarId>,
    ) -> Vec<ScheduleSpan> {
        let mut found: Vec<_> = self
            .schedules
            .iter()
            .filter(|a| in_calendar(a, calendar) && a.overlaps(from, to))
            .cloned()
            .collect();
        sort_schedules(&mut found);
        found
    }

    /// Schedules covering `date`, by start date.
    pub fn on(&self, date: Date, calendar: Option<CalendarId>) -> Vec<&ScheduleSpan> {
        let mut found = schedules_on(date, &self.schedules);
        found.retain(|a| in_calendar(a, calendar));
        found
    }
}

fn in_calendar(schedule: &ScheduleSpan, calendar: Option<CalendarId>) -> bool {
    calendar.is_none_or(|id| schedule.calendar() == Some(id))
}

impl FromStr for ScheduleStore {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let file: ScheduleFile = toml::from_str(s)?;

        let mut seen = HashSet::new();
        for calendar in &file.calendars {
            if !seen.insert(calendar.id()) {
                return Err(CalendarError::DuplicateCalendarId(calendar.id()).into());
            }
        }

        let mut ids = HashSet::new();
        for schedule in &file.schedules {
            if !ids.insert(schedule.id()) {
                return Err(CalendarError::DuplicateScheduleId(schedule.id()).into());
            }
            match schedule.calendar() {
                Some(calendar) if !seen.contains(&calendar) => {
                    return Err(CalendarError::UnknownCalendar {
                        schedule: schedule.id(),
                        calendar,
                    }
                    .into());
                }
                _ => {}
            }
        }

        Ok(Self {
            calendars: file.calendars,
            schedules: file.schedules,
        })
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use tempfile::TempDir;

    use super::*;

    const SAMPLE: &str = r##"
[[schedules]]
id = 2
name = "Trip"
start = "2024-04-10"
end = "2024-04-16"
color = "#3366FF"

[[schedules]]
id = 1
name = "Dentist"
start = "2024-04-10"
end = "2024-04-10"

[[schedules]]
id = 3
name = "Conference"
start = "2024-05-02"
end = "2024-05-03"
"##;

    #[test]
    fn range_query_is_sorted_for_layout() {
        let store: ScheduleStore = SAMPLE.parse().unwrap();
        assert_eq!(store.len(), 3);

        let ids: Vec<_> = store
            .in_range(date(2024, 3, 31), date(2024, 5, 4), None)
            .iter()
            .map(|a| a.id().0)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let ids: Vec<_> = store
            .in_range(date(2024, 4, 11), date(2024, 4, 30), None)
            .iter()
            .map(|a| a.id().0)
            .collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn day_query() {
        let store: ScheduleStore = SAMPLE.parse().unwrap();
        let names: Vec<_> = store.on(date(2024, 4, 10), None).iter().map(|a| a.text()).collect();
        assert_eq!(names, vec!["Trip", "Dentist"]);
        assert!(store.on(date(2024, 4, 20), None).is_empty());
    }

    #[test]
    fn empty_file_has_no_schedules() {
        let store: ScheduleStore = "".parse().unwrap();
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn rejects_backwards_schedule() {
        let result = r#"
[[schedules]]
id = 1
name = "Backwards"
start = "2024-04-10"
end = "2024-04-09"
"#
        .parse::<ScheduleStore>();
        assert!(result.is_err());
    }

    const CALENDARS: &str = r#"
[[calendars]]
id = 1
name = "School"
slices = [
    { name = "Spring", start = "2024-02-26", end = "2024-06-30" },
    { name = "Fall", start = "2024-09-02", end = "2025-01-12" },
]

[[calendars]]
id = 2
name = "Personal"

[[schedules]]
id = 1
name = "Exam"
start = "2024-04-10"
end = "2024-04-11"
calendar = 1

[[schedules]]
id = 2
name = "Trip"
start = "2024-04-10"
end = "2024-04-16"
calendar = 2

[[schedules]]
id = 3
name = "Dentist"
start = "2024-04-10"
end = "2024-04-10"
"#;

    #[test]
    fn calendar_filter() {
        let store: ScheduleStore = CALENDARS.parse().unwrap();
        assert_eq!(store.calendar(CalendarId(1)).map(Calendar::name), Some("School"));
        assert!(store.calendar(CalendarId(9)).is_none());

        let ids = |calendar| {
            store
                .in_range(date(2024, 4, 1), date(2024, 4, 30), calendar)
                .iter()
                .map(|a| a.id().0)
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(None), vec![1, 2, 3]);
        assert_eq!(ids(Some(CalendarId(1))), vec![1]);
        assert_eq!(ids(Some(CalendarId(2))), vec![2]);

        let names: Vec<_> = store
            .on(date(2024, 4, 10), Some(CalendarId(2)))
            .iter()
            .map(|a| a.text())
            .collect();
        assert_eq!(names, vec!["Trip"]);
    }

    #[test]
    fn rejects_duplicate_schedule_ids() {
        let err = r#"
[[schedules]]
id = 1
name = "First"
start = "2024-04-10"
end = "2024-04-10"

[[schedules]]
id = 1
name = "Second"
start = "2024-04-12"
end = "2024-04-12"
"#
        .parse::<ScheduleStore>()
        .unwrap_err();
        assert_eq!(err.to_string(), "schedule id #1 is used more than once");
    }

    #[test]
    fn rejects_duplicate_calendar_ids() {
        let err = r#"
[[calendars]]
id = 1
name = "School"

[[calendars]]
id = 1
name = "Work"
"#
        .parse::<ScheduleStore>()
        .unwrap_err();
        assert_eq!(err.to_string(), "calendar id @1 is used more than once");
    }

    #[test]
    fn rejects_unknown_calendar_reference() {
        let err = r#"
[[schedules]]
id = 4
name = "Orphan"
start = "2024-04-10"
end = "2024-04-10"
calendar = 7
"#
        .parse::<ScheduleStore>()
        .unwrap_err();
        assert_eq!(err.to_string(), "schedule #4 refers to unknown calendar @7");
    }

    #[test]
    fn rejects_invalid_slices() {
        let blank = r#"
[[calendars]]
id = 1
name = " "
"#
        .parse::<ScheduleStore>();
        assert!(blank.is_err());

        let missing = r#"
[[calendars]]
id = 1
name = "School"
slices = [{ name = "Spring", end = "2024-06-30" }]
"#
        .parse::<ScheduleStore>();
        assert!(missing.is_err());
    }

    #[tokio::test]
    async fn loads_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("schedules.toml");
        std::fs::write(&path, SAMPLE).unwrap();

        let store = ScheduleStore::load(&path).await.unwrap();
        assert_eq!(store.len(), 3);

        let missing = ScheduleStore::load(&temp_dir.path().join("missing.toml")).await;
        assert!(missing.unwrap_err().to_string().contains("Failed to read"));
    }
}
