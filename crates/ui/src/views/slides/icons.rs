use dioxus::prelude::*;

/// Line icons drawn on a 24×24 grid with the current text color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    BrainCircuit,
    ChevronDown,
    ChevronUp,
    Globe,
    Heart,
    Quote,
    ShieldCheck,
    Target,
    TrendingUp,
    Trophy,
    Users,
    UsersRound,
}

#[component]
pub fn Icon(kind: IconKind, size: u32, class: Option<&'static str>) -> Element {
    rsx! {
        svg {
            class: class.unwrap_or("icon"),
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {icon_paths(kind)}
        }
    }
}

fn icon_paths(kind: IconKind) -> Element {
    match kind {
        IconKind::BrainCircuit => rsx! {
            path { d: "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z" }
            path { d: "M9 13a4.5 4.5 0 0 0 3-4" }
            path { d: "M12 13h4" }
            path { d: "M12 18h6a2 2 0 0 1 2 2v1" }
            path { d: "M12 8h8" }
            path { d: "M16 8V5a2 2 0 0 1 2-2" }
            circle { cx: "16", cy: "13", r: ".5" }
            circle { cx: "18", cy: "3", r: ".5" }
            circle { cx: "20", cy: "21", r: ".5" }
            circle { cx: "20", cy: "8", r: ".5" }
        },
        IconKind::ChevronDown => rsx! {
            path { d: "m6 9 6 6 6-6" }
        },
        IconKind::ChevronUp => rsx! {
            path { d: "m18 15-6-6-6 6" }
        },
        IconKind::Globe => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20" }
            path { d: "M2 12h20" }
        },
        IconKind::Heart => rsx! {
            path { d: "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" }
        },
        IconKind::Quote => rsx! {
            path { d: "M3 21c3 0 7-1 7-8V5c0-1.25-.756-2.017-2-2H4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2 1 0 1 0 1 1v1c0 1-1 2-2 2s-1 .008-1 1.031V20c0 1 0 1 1 1z" }
            path { d: "M15 21c3 0 7-1 7-8V5c0-1.25-.757-2.017-2-2h-4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z" }
        },
        IconKind::ShieldCheck => rsx! {
            path { d: "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" }
            path { d: "m9 12 2 2 4-4" }
        },
        IconKind::Target => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            circle { cx: "12", cy: "12", r: "6" }
            circle { cx: "12", cy: "12", r: "2" }
        },
        IconKind::TrendingUp => rsx! {
            polyline { points: "22 7 13.5 15.5 8.5 10.5 2 17" }
            polyline { points: "16 7 22 7 22 13" }
        },
        IconKind::Trophy => rsx! {
            path { d: "M6 9H4.5a2.5 2.5 0 0 1 0-5H6" }
            path { d: "M18 9h1.5a2.5 2.5 0 0 0 0-5H18" }
            path { d: "M4 22h16" }
            path { d: "M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22" }
            path { d: "M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22" }
            path { d: "M18 2H6v7a6 6 0 0 0 12 0V2Z" }
        },
        IconKind::Users => rsx! {
            path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
            circle { cx: "9", cy: "7", r: "4" }
            path { d: "M22 21v-2a4 4 0 0 0-3-3.87" }
            path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
        },
        IconKind::UsersRound => rsx! {
            path { d: "M18 21a8 8 0 0 0-16 0" }
            circle { cx: "10", cy: "8", r: "5" }
            path { d: "M22 20c0-3.37-2-6.5-4-8a5 5 0 0 0-.45-8.3" }
        },
    }
}
