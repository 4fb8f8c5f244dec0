use leptos::prelude::*;

use crate::booking::{SeatId, SeatSelection, SeatStatus, SeatingPlan};

/// Grid of seats, one button per seat. Unavailable seats are disabled; every
/// other click is reported to the parent, which decides what changes.
#[component]
pub fn SeatMap(
    plan: SeatingPlan,
    #[prop(into)] selection: Signal<SeatSelection>,
    on_seat_click: impl Fn(SeatId) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let plan = StoredValue::new(plan);
    let rows: Vec<(char, Vec<SeatId>)> = plan.with_value(|plan| {
        plan.row_letters()
            .map(|row| (row, plan.seats_in_row(row)))
            .collect()
    });

    view! {
        <div class="seat-map">
            <div class="seat-map__stage">"Stage"</div>
            <div class="seat-map__rows">
                {rows.into_iter().map(|(row, seats)| {
                    view! {
                        <div class="seat-map__row">
                            <span class="seat-map__row-label">{row.to_string()}</span>
                            {seats.into_iter().map(|seat| {
                                let status = move || {
                                    selection.with(|selected| plan.with_value(|plan| plan.status_of(seat, selected)))
                                };
                                view! {
                                    <button
                                        class=move || status().css_class()
                                        title=seat.to_string()
                                        disabled=move || status() == SeatStatus::Unavailable
                                        on:click=move |_| {
                                            if status() != SeatStatus::Unavailable {
                                                on_seat_click(seat);
                                            }
                                        }
                                    >
                                        {seat.column().to_string()}
                                    </button>
                                }
                            }).collect::<Vec<_>>()}
                        </div>
                    }
                }).collect::<Vec<_>>()}
            </div>
            <div class="seat-map__legend">
                <span class="seat seat--available">"Available"</span>
                <span class="seat seat--selected">"Selected"</span>
                <span class="seat seat--unavailable">"Unavailable"</span>
            </div>
        </div>
    }
}
