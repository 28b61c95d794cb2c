use crate::api::use_services;
use crate::components::notice::{Notice, NoticeBar, flash};
use leptos::prelude::*;
use leptos::task::spawn_local;
use service_desk::present::technician::{DashboardTab, TechnicianBoard};
use service_desk_shared::date::format_display_date;
use service_desk_shared::{AssignmentAction, AssignmentResponse, AssignmentStatus};

const REJECT_CONFIRM: &str = "Are you sure you want to decline this assignment?";

/// 当前状态下可执行的操作
fn actions_for(status: AssignmentStatus) -> &'static [(AssignmentAction, &'static str, &'static str)] {
    match status {
        AssignmentStatus::Pending => &[
            (AssignmentAction::Accept, "Accept", "btn btn-sm btn-primary"),
            (AssignmentAction::Reject, "Decline", "btn btn-sm btn-ghost"),
        ],
        AssignmentStatus::Assigned => &[(AssignmentAction::Start, "Start Job", "btn btn-sm btn-primary")],
        AssignmentStatus::InProgress => {
            &[(AssignmentAction::Complete, "Mark Complete", "btn btn-sm btn-success")]
        }
        _ => &[],
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn TechnicianDashboardPage() -> impl IntoView {
    let services = StoredValue::new(use_services());

    let board = RwSignal::new(TechnicianBoard::default());
    let (loading, set_loading) = signal(true);
    let (notice, set_notice) = signal(Notice::None);

    let api = services.get_value().assignments();
    spawn_local(async move {
        match api.mine().await {
            Ok(list) => board.set(TechnicianBoard::new(list)),
            Err(e) => log::error!("[TechnicianDashboard] {}", e),
        }
        set_loading.try_set(false);
    });

    let run_action = move |assignment_id: String, action: AssignmentAction| {
        if action == AssignmentAction::Reject && !confirm(REJECT_CONFIRM) {
            return;
        }
        let api = services.get_value().assignments();
        spawn_local(async move {
            match api.act(&assignment_id, action).await {
                Ok(()) => {
                    board.try_update(|b| b.apply(&assignment_id, action));
                }
                Err(e) => {
                    log::error!("[TechnicianDashboard] {} failed: {}", action.path_segment(), e);
                    flash(set_notice, e.user_message_or("Action failed"), true);
                }
            }
        });
    };

    let assignment_card = move |a: AssignmentResponse| {
        let id = a.assignment_id.clone();
        view! {
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <div class="flex justify-between">
                        <h2 class="card-title">"Booking " {a.booking_id.clone()}</h2>
                        <span class="badge badge-outline">{a.status.as_str()}</span>
                    </div>
                    <p class="text-sm text-base-content/70">
                        "Assigned " {format_display_date(&a.created_at)}
                    </p>
                    <div class="card-actions justify-end">
                        {actions_for(a.status)
                            .iter()
                            .map(|(action, label, class)| {
                                let id = id.clone();
                                let action = *action;
                                view! {
                                    <button class=*class on:click=move |_| run_action(id.clone(), action)>
                                        {*label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        }
    };

    view! {
        <NoticeBar notice=notice />
        <div class="container mx-auto px-4 py-8">
            <h1 class="text-3xl font-bold mb-6">"My Assignments"</h1>

            <div role="tablist" class="tabs tabs-boxed mb-6 w-fit">
                {DashboardTab::ALL
                    .iter()
                    .map(|tab| {
                        let tab = *tab;
                        view! {
                            <a
                                role="tab"
                                class=move || {
                                    if board.get().active_tab == tab { "tab tab-active" } else { "tab" }
                                }
                                on:click=move |_| board.update(|b| b.active_tab = tab)
                            >
                                {tab.label()} " (" {move || board.get().count(tab)} ")"
                            </a>
                        }
                    })
                    .collect_view()}
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex justify-center py-16">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            >
                {move || {
                    let current: Vec<AssignmentResponse> =
                        board.get().current().into_iter().cloned().collect();
                    if current.is_empty() {
                        view! { <p class="text-center text-base-content/70 py-16">"Nothing here yet"</p> }
                            .into_any()
                    } else {
                        view! {
                            <div class="grid gap-4 md:grid-cols-2">
                                {current.into_iter().map(assignment_card).collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }}
            </Show>
        </div>
    }
}
