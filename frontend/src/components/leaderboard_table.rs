use iqtest_shared::LeaderboardEntry;
use yew::prelude::*;

use crate::{components::badge::Badge, i18n::current::leaderboard as t, utils::format_date};

#[derive(Properties, PartialEq)]
pub struct LeaderboardTableProps {
    /// `(displayed rank, entry)`; local views renumber from 1.
    pub rows: Vec<(u32, LeaderboardEntry)>,
}

#[function_component(LeaderboardTable)]
pub fn leaderboard_table(props: &LeaderboardTableProps) -> Html {
    if props.rows.is_empty() {
        return html! {
            <p class="py-10 text-center text-[var(--muted)]">{ t::EMPTY }</p>
        };
    }

    html! {
        <table class="w-full text-sm">
            <thead>
                <tr class="text-left text-[var(--muted)]">
                    <th scope="col">{ t::COL_RANK }</th>
                    <th scope="col">{ t::COL_NAME }</th>
                    <th scope="col">{ t::COL_SCORE }</th>
                    <th scope="col">{ t::COL_LOCATION }</th>
                    <th scope="col">{ t::COL_DURATION }</th>
                    <th scope="col">{ t::COL_DATE }</th>
                </tr>
            </thead>
            <tbody>
                { for props.rows.iter().map(|(rank, entry)| html! {
                    <tr key={format!("{}-{}", entry.rank, entry.name)} class="border-t border-[var(--border)]">
                        <td class="font-semibold">{ format!("#{rank}") }</td>
                        <td>{ &entry.name }</td>
                        <td>
                            <span class="mr-2 font-bold">{ entry.score }</span>
                            <Badge tier={entry.badge} />
                        </td>
                        <td>{ &entry.location }</td>
                        <td>{ entry.duration_label().unwrap_or_else(|| "—".to_string()) }</td>
                        <td>{ format_date(&entry.date) }</td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}
