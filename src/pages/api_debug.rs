//! API debug page: endpoint probes and the backend's user list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Diagnostic screen for checking that the configured backend is reachable
//! and answering with JSON. One run at a time; results are tagged with the
//! run that produced them so a late task cannot overwrite a newer run.

#[cfg(test)]
#[path = "api_debug_test.rs"]
mod api_debug_test;

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::api::{PROBE_TARGETS, SharedApi, describe_probe};
use crate::net::types::User;

/// One probe row: label, path, and the outcome text once it has finished.
#[derive(Clone, Debug, PartialEq, Eq)]
struct ProbeRow {
    label: &'static str,
    path: &'static str,
    outcome: Option<String>,
}

fn pending_rows() -> Vec<ProbeRow> {
    PROBE_TARGETS
        .iter()
        .map(|&(label, path)| ProbeRow { label, path, outcome: None })
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
struct ProbeBoard {
    run: u64,
    running: bool,
    rows: Vec<ProbeRow>,
    users: Option<Result<Vec<User>, String>>,
}

impl ProbeBoard {
    /// Reset the table and return the new run id, or `None` while a run is
    /// still in progress.
    fn begin_run(&mut self) -> Option<u64> {
        if self.running {
            return None;
        }
        self.run += 1;
        self.running = true;
        self.rows = pending_rows();
        self.users = None;
        Some(self.run)
    }

    fn record(&mut self, run: u64, index: usize, outcome: String) -> bool {
        if run != self.run {
            return false;
        }
        match self.rows.get_mut(index) {
            Some(row) => {
                row.outcome = Some(outcome);
                true
            }
            None => false,
        }
    }

    fn finish(&mut self, run: u64, users: Result<Vec<User>, String>) -> bool {
        if run != self.run {
            return false;
        }
        self.users = Some(users);
        self.running = false;
        true
    }
}

#[component]
pub fn ApiDebugPage() -> impl IntoView {
    let api = expect_context::<SharedApi>();
    let base_url = expect_context::<ApiConfig>().base_url().to_owned();
    let board = RwSignal::new(ProbeBoard::default());

    let run = move || {
        let Some(run_id) = board.try_update(ProbeBoard::begin_run).flatten() else {
            return;
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            for (index, (_, path)) in PROBE_TARGETS.iter().enumerate() {
                let outcome = describe_probe(&api.probe(path).await);
                board.try_update(|b| b.record(run_id, index, outcome));
            }
            let listed = api.list_users().await.map_err(|e| e.to_string());
            board.try_update(|b| b.finish(run_id, listed));
        });
    };
    run();

    view! {
        <div class="debug-page">
            <h1>"API Debug"</h1>
            <p class="debug-page__base">"Backend: " <code>{base_url}</code></p>
            <button class="btn" disabled=move || board.with(|b| b.running) on:click=move |_| run()>
                {move || if board.with(|b| b.running) { "Testing..." } else { "Run Again" }}
            </button>
            <table class="debug-page__probes">
                <thead>
                    <tr><th>"Endpoint"</th><th>"Path"</th><th>"Result"</th></tr>
                </thead>
                <tbody>
                    {move || {
                        board
                            .with(|b| b.rows.clone())
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td>{row.label}</td>
                                        <td><code>{format!("/{}", row.path)}</code></td>
                                        <td>{row.outcome.unwrap_or_else(|| "Checking...".to_owned())}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
            <h2>"Users"</h2>
            {move || match board.with(|b| b.users.clone()) {
                None => view! { <p class="page-status">"Loading users..."</p> }.into_any(),
                Some(Err(err)) => view! { <p class="page-error">{format!("Error: {err}")}</p> }.into_any(),
                Some(Ok(list)) if list.is_empty() => view! { <p class="page-status">"No users."</p> }.into_any(),
                Some(Ok(list)) => view! {
                    <ul class="debug-page__users">
                        {list
                            .into_iter()
                            .map(|u| view! { <li>{format!("#{} {} <{}>", u.id, u.name, u.email)}</li> })
                            .collect::<Vec<_>>()}
                    </ul>
                }
                .into_any(),
            }}
        </div>
    }
}
