//! Test doubles: an in-memory chart backend and snapshot builders.

use crate::renderer::{ChartBackend, ChartHandle};
use chrono::NaiveDate;
use epi_core::{
    DailyData, DashboardError, EpidemicSnapshot, GeoJson, LatestStats, RegionalData, Result,
};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Init(String, usize),
    SetOption(usize),
    Resize(usize),
    Dispose(usize),
    RegisterMap(String),
}

#[derive(Default)]
struct State {
    events: Vec<Event>,
    next_id: usize,
    live: HashMap<usize, String>,
    last_options: HashMap<String, Value>,
    fail_mount: Option<String>,
}

/// Records every backend call. Clones share the same record.
#[derive(Clone, Default)]
pub struct RecordingBackend {
    state: Rc<RefCell<State>>,
}

impl RecordingBackend {
    /// `set_option` fails for charts mounted on `mount_id`.
    pub fn failing_on(mount_id: &str) -> Self {
        let backend = Self::default();
        backend.state.borrow_mut().fail_mount = Some(mount_id.to_string());
        backend
    }

    pub fn events(&self) -> Vec<Event> {
        self.state.borrow().events.clone()
    }

    pub fn live_instances(&self, mount_id: &str) -> usize {
        self.state
            .borrow()
            .live
            .values()
            .filter(|m| m.as_str() == mount_id)
            .count()
    }

    pub fn total_live(&self) -> usize {
        self.state.borrow().live.len()
    }

    pub fn last_option(&self, mount_id: &str) -> Option<Value> {
        self.state.borrow().last_options.get(mount_id).cloned()
    }
}

pub struct RecordedChart {
    id: usize,
    mount: String,
    state: Rc<RefCell<State>>,
}

impl ChartHandle for RecordedChart {
    fn set_option(&mut self, option: &Value) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_mount.as_deref() == Some(self.mount.as_str()) {
            return Err(DashboardError::render(&self.mount, "rejected option"));
        }
        state.events.push(Event::SetOption(self.id));
        state.last_options.insert(self.mount.clone(), option.clone());
        Ok(())
    }

    fn resize(&mut self) {
        self.state.borrow_mut().events.push(Event::Resize(self.id));
    }

    fn dispose(&mut self) {
        let mut state = self.state.borrow_mut();
        state.events.push(Event::Dispose(self.id));
        state.live.remove(&self.id);
    }
}

impl ChartBackend for RecordingBackend {
    type Handle = RecordedChart;

    fn init(&self, mount_id: &str) -> Result<RecordedChart> {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.events.push(Event::Init(mount_id.to_string(), id));
        state.live.insert(id, mount_id.to_string());
        Ok(RecordedChart {
            id,
            mount: mount_id.to_string(),
            state: self.state.clone(),
        })
    }

    fn register_map(&self, map_name: &str, _geo: &GeoJson) -> Result<()> {
        self.state
            .borrow_mut()
            .events
            .push(Event::RegisterMap(map_name.to_string()));
        Ok(())
    }
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 3, day).unwrap()
}

/// Small snapshot with three reporting days and the given regional rows.
pub fn snapshot_with(regions: &[&str], confirmed: &[u64]) -> EpidemicSnapshot {
    EpidemicSnapshot {
        latest_stats: LatestStats {
            latest_date: date(3),
            new_confirmed: 300,
            cumulative_confirmed: 600,
            existing_confirmed: 500,
            new_recovered: 20,
            new_deaths: 1,
            cumulative_recovered: None,
            cumulative_deaths: None,
        },
        daily_data: DailyData {
            dates: vec![date(1), date(2), date(3)],
            new_confirmed: vec![100, 200, 300],
            existing_confirmed: vec![100, 280, 500],
            cumulative_confirmed: vec![100, 300, 600],
            ..DailyData::default()
        },
        regional_data: RegionalData {
            regions: regions.iter().map(|r| r.to_string()).collect(),
            confirmed: confirmed.to_vec(),
        },
    }
}

pub fn geo_with(names: &[&str]) -> GeoJson {
    let features: Vec<Value> = names
        .iter()
        .map(|name| json!({"type": "Feature", "properties": {"name": name}, "geometry": null}))
        .collect();
    GeoJson(json!({"type": "FeatureCollection", "features": features}))
}
