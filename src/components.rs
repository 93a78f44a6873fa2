//! Yew view components for the treadmill page.
//!
//! Everything here renders from props except [`Page`], which owns the
//! workout and sidebar reducers, and [`StickFigure`], whose stride timer
//! lives as long as it is mounted.

use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::*;
use crate::hooks::use_stride_phase;
use crate::utils::format_one_decimal;
use crate::{
    marker_left_css, LimbPose, RunnerStyle, SidebarAction, SidebarState, StatsAction,
    StridePhase, WorkoutStats,
};

/// Read the current value out of an input event.
fn input_value(e: InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

fn marker_style(speed: f64) -> String {
    format!("left: {}; transform: translateX(-50%);", marker_left_css(speed))
}

/// Sky and two rows of hills, stretched over the whole page.
#[function_component(Scenery)]
pub fn scenery() -> Html {
    html! {
        <svg class="scenery" viewBox="0 0 800 600" preserveAspectRatio="none" aria-hidden="true">
            <rect x="0" y="0" width="800" height="600" fill="#aee9ff" />
            <path d="M0 400 Q200 300 400 400 T800 400 V600 H0Z" fill="#7ec850" />
            <path d="M0 500 Q300 350 600 500 T800 500 V600 H0Z" fill="#4e944f" />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsPanelProps {
    pub stats: Rc<WorkoutStats>,
}

/// Card on the left showing the current workout numbers.
#[function_component(StatsPanel)]
pub fn stats_panel(props: &StatsPanelProps) -> Html {
    let stats = &props.stats;
    html! {
        <div class="stats-panel">
            <div class="stats-row">
                <div class="speed-badge">{ stats.speed().to_string() }</div>
                <div class="stats-column">
                    <span class="stats-unit">{ "KM/H" }</span>
                    <span class="stats-detail">{ format!("+{}%", stats.incline()) }</span>
                </div>
            </div>
            <div class="stats-row">
                <svg width="60" height="40" viewBox="0 0 60 40">
                    <polyline
                        points="0,35 10,30 20,25 30,20 40,15 50,10 60,5"
                        fill="none"
                        stroke="#4e944f"
                        stroke-width="3"
                    />
                    <circle cx="50" cy="10" r="3" fill="#ff7f2a" />
                </svg>
                <div class="stats-column">
                    <span class="stats-unit">{ stats.time_text() }</span>
                    <span class="stats-detail">{ format!("{} km", stats.distance_km()) }</span>
                    <span class="stats-detail">{ format!("{} Cal", stats.calories()) }</span>
                </div>
            </div>
        </div>
    }
}

/// Horizontal running track with its lane line and the shadow in front.
#[function_component(TrackBar)]
pub fn track_bar() -> Html {
    html! {
        <>
            <div class="track">
                <div class="track-lane" />
            </div>
            <div class="path-shadow" />
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct RunnerProps {
    pub speed: f64,
}

/// Runner drawn with the animated image asset.
#[function_component(RunnerImage)]
pub fn runner_image(props: &RunnerProps) -> Html {
    html! {
        <div class="runner" style={marker_style(props.speed)}>
            <img
                src={RUNNER_ASSET}
                alt={RUNNER_ALT}
                width={RUNNER_SIZE_PX.to_string()}
                height={RUNNER_SIZE_PX.to_string()}
                class="runner-image"
            />
        </div>
    }
}

/// Runner drawn as a stick figure whose limbs swing on a timer.
#[function_component(StickFigure)]
pub fn stick_figure(props: &RunnerProps) -> Html {
    let phase = use_stride_phase(STRIDE_INTERVAL_MS);
    html! { <FigurePose speed={props.speed} phase={phase} /> }
}

#[derive(Properties, PartialEq)]
pub struct FigurePoseProps {
    pub speed: f64,
    pub phase: StridePhase,
}

/// One frame of the stick figure.
#[function_component(FigurePose)]
pub fn figure_pose(props: &FigurePoseProps) -> Html {
    let pose = LimbPose::for_phase(props.phase);

    // Arms pivot at the shoulder (30,30), legs at the hip (30,58).
    let limb = |angle: f64, pivot_y: u32, length: u32, class: &'static str| {
        html! {
            <line
                class={class}
                x1="30" y1={pivot_y.to_string()}
                x2="30" y2={(pivot_y + length).to_string()}
                transform={format!("rotate({} 30 {})", angle, pivot_y)}
                stroke-width="5"
                stroke-linecap="round"
            />
        }
    };

    html! {
        <div class="runner" style={marker_style(props.speed)}>
            <svg class="stick-figure" width="60" height="100" viewBox="0 0 60 100"
                aria-label="Running figure" role="img" data-frame={props.phase.index().to_string()}>
                { limb(pose.right_arm, 30, 24, "limb limb-far") }
                { limb(pose.right_leg, 58, 34, "limb limb-far") }
                <line class="limb" x1="30" y1="23" x2="30" y2="58" stroke-width="5" stroke-linecap="round" />
                <circle class="head" cx="30" cy="14" r="9" />
                { limb(pose.left_leg, 58, 34, "limb") }
                { limb(pose.left_arm, 30, 24, "limb") }
            </svg>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatSliderProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub min: f64,
    pub max: f64,
    pub value: f64,
    pub oninput: Callback<String>,
}

/// Range control for one of the decimal statistics.
#[function_component(StatSlider)]
pub fn stat_slider(props: &StatSliderProps) -> Html {
    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <input type="range"
                id={props.id.clone()}
                min={props.min.to_string()}
                max={props.max.to_string()}
                step={DECIMAL_STEP.to_string()}
                value={props.value.to_string()}
                oninput={props.oninput.reform(input_value)}
            />
            <div class="slider-value">{ format_one_decimal(props.value) }</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CaloriesFieldProps {
    pub value: u32,
    pub oninput: Callback<String>,
}

#[function_component(CaloriesField)]
pub fn calories_field(props: &CaloriesFieldProps) -> Html {
    html! {
        <div class="form-group">
            <label for="calories_input">{ "Calories" }</label>
            <input type="number"
                id="calories_input"
                min="0"
                max={MAX_CALORIES.to_string()}
                value={props.value.to_string()}
                oninput={props.oninput.reform(input_value)}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimeControlProps {
    pub elapsed_secs: u32,
    pub time_text: AttrValue,
    pub oninput: Callback<String>,
}

/// Time slider in 5 second steps with the "MM:SS" readout.
#[function_component(TimeControl)]
pub fn time_control(props: &TimeControlProps) -> Html {
    html! {
        <div class="form-group">
            <label for="time_input">{ "Time (min:sec)" }</label>
            <input type="range"
                id="time_input"
                min="0"
                max={MAX_ELAPSED_SECS.to_string()}
                step={ELAPSED_STEP_SECS.to_string()}
                value={props.elapsed_secs.to_string()}
                oninput={props.oninput.reform(input_value)}
            />
            <div class="slider-value">{ props.time_text.clone() }</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub stats: Rc<WorkoutStats>,
    pub state: SidebarState,
    pub on_action: Callback<StatsAction>,
    pub on_close: Callback<()>,
}

/// Panel of override controls. Slides fully off the right edge when closed.
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let stats = &props.stats;
    let on_action = &props.on_action;
    let style = if props.state.open {
        format!("transform: {};", props.state.translation())
    } else {
        format!("transform: {}; box-shadow: none;", props.state.translation())
    };

    html! {
        <aside class="sidebar" style={style}>
            <button class="sidebar-close" aria-label="Close sidebar"
                onclick={props.on_close.reform(|_| ())}>
                <svg width="24" height="24" fill="none" stroke="currentColor" stroke-width="2"
                    stroke-linecap="round" stroke-linejoin="round">
                    <path d="M15 18l-6-6 6-6" />
                </svg>
            </button>
            <h2>{ "Simulate Values" }</h2>
            <StatSlider id="speed_input" label="Speed (km/h)"
                min={MIN_SPEED_KMH} max={MAX_SPEED_KMH} value={stats.speed()}
                oninput={on_action.reform(StatsAction::Speed)} />
            <StatSlider id="incline_input" label="Incline (%)"
                min={0.0} max={MAX_INCLINE_PCT} value={stats.incline()}
                oninput={on_action.reform(StatsAction::Incline)} />
            <StatSlider id="distance_input" label="Distance (km)"
                min={0.0} max={MAX_DISTANCE_KM} value={stats.distance_km()}
                oninput={on_action.reform(StatsAction::Distance)} />
            <CaloriesField value={stats.calories()}
                oninput={on_action.reform(StatsAction::Calories)} />
            <TimeControl elapsed_secs={stats.elapsed_secs()}
                time_text={stats.time_text().to_string()}
                oninput={on_action.reform(StatsAction::Elapsed)} />
        </aside>
    }
}

#[derive(Properties, PartialEq)]
pub struct OpenSidebarButtonProps {
    pub on_open: Callback<()>,
}

/// Re-open affordance shown while the sidebar is off screen.
#[function_component(OpenSidebarButton)]
pub fn open_sidebar_button(props: &OpenSidebarButtonProps) -> Html {
    html! {
        <button class="sidebar-open" aria-label="Open sidebar"
            onclick={props.on_open.reform(|_| ())}>
            <svg width="28" height="28" fill="none" stroke="currentColor" stroke-width="2"
                stroke-linecap="round" stroke-linejoin="round">
                <line x1="4" y1="21" x2="24" y2="21" />
                <line x1="4" y1="14" x2="24" y2="14" />
                <line x1="4" y1="7" x2="24" y2="7" />
                <circle cx="14" cy="21" r="2" />
                <circle cx="8" cy="14" r="2" />
                <circle cx="20" cy="7" r="2" />
            </svg>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct SidebarDockProps {
    pub stats: Rc<WorkoutStats>,
    pub state: SidebarState,
    pub on_action: Callback<StatsAction>,
    pub on_close: Callback<()>,
    pub on_open: Callback<()>,
}

/// Sidebar plus the button that brings it back once closed.
#[function_component(SidebarDock)]
pub fn sidebar_dock(props: &SidebarDockProps) -> Html {
    html! {
        <>
            <Sidebar stats={props.stats.clone()} state={props.state}
                on_action={props.on_action.clone()} on_close={props.on_close.clone()} />
            if !props.state.open {
                <OpenSidebarButton on_open={props.on_open.clone()} />
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub runner_style: RunnerStyle,
}

/// Whole page: owns the workout and sidebar state and lays everything out.
#[function_component(Page)]
pub fn page(props: &PageProps) -> Html {
    let stats = use_reducer(WorkoutStats::default);
    let sidebar = use_reducer(SidebarState::default);

    let on_action = {
        let stats = stats.dispatcher();
        Callback::from(move |action: StatsAction| stats.dispatch(action))
    };
    let on_close = {
        let sidebar = sidebar.dispatcher();
        Callback::from(move |_: ()| sidebar.dispatch(SidebarAction::Close))
    };
    let on_open = {
        let sidebar = sidebar.dispatcher();
        Callback::from(move |_: ()| sidebar.dispatch(SidebarAction::Open))
    };

    let snapshot = Rc::new((*stats).clone());

    html! {
        <div class="page">
            <Scenery />
            <StatsPanel stats={snapshot.clone()} />
            <TrackBar />
            {
                match props.runner_style {
                    RunnerStyle::Image => html! { <RunnerImage speed={stats.speed()} /> },
                    RunnerStyle::Figure => html! { <StickFigure speed={stats.speed()} /> },
                }
            }
            <div class="page-title">{ "Treadmill Path Simulation" }</div>

            if props.runner_style == RunnerStyle::Image {
                <SidebarDock stats={snapshot} state={*sidebar}
                    on_action={on_action} on_close={on_close} on_open={on_open} />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::ServerRenderer;

    fn render_dock(open: bool) -> String {
        block_on(
            ServerRenderer::<SidebarDock>::with_props(move || SidebarDockProps {
                stats: Rc::new(WorkoutStats::default()),
                state: SidebarState { open },
                on_action: Callback::noop(),
                on_close: Callback::noop(),
                on_open: Callback::noop(),
            })
            .render(),
        )
    }

    fn render_pose(phase: StridePhase) -> String {
        block_on(
            ServerRenderer::<FigurePose>::with_props(move || FigurePoseProps { speed: 5.2, phase })
                .render(),
        )
    }

    fn render_page(runner_style: RunnerStyle) -> String {
        block_on(ServerRenderer::<Page>::with_props(move || PageProps { runner_style }).render())
    }

    #[test]
    fn marker_style_offsets_and_centres() {
        assert_eq!(
            marker_style(20.0),
            "left: calc(80% + 10%); transform: translateX(-50%);"
        );
        assert_eq!(
            marker_style(0.0),
            "left: calc(0% + 10%); transform: translateX(-50%);"
        );
    }

    #[test]
    fn open_sidebar_is_on_screen_without_reopen_button() {
        let html = render_dock(true);
        assert!(html.contains("transform: translateX(0);"));
        assert!(!html.contains("box-shadow: none"));
        assert!(html.contains("Simulate Values"));
        assert!(html.contains(r#"aria-label="Close sidebar""#));
        assert!(!html.contains(r#"aria-label="Open sidebar""#));
    }

    #[test]
    fn closed_sidebar_slides_off_and_offers_reopen() {
        let html = render_dock(false);
        assert!(html.contains("transform: translateX(100%); box-shadow: none;"));
        assert!(html.contains(r#"aria-label="Open sidebar""#));
        assert!(!html.contains("aria-hidden"));
    }

    #[test]
    fn sidebar_shows_controls_with_current_values() {
        let html = render_dock(true);
        for id in ["speed_input", "incline_input", "distance_input", "calories_input", "time_input"] {
            assert!(html.contains(id), "missing control {id}");
        }
        assert!(html.contains(r#"<div class="slider-value">42:45</div>"#));
        assert!(html.contains(r#"<div class="slider-value">5.2</div>"#));
        assert!(!html.contains(r#"type="text""#));
    }

    /// Limb rotations in paint order: far arm, far leg, near leg, near arm.
    fn rotations(html: &str) -> Vec<&str> {
        html.split("transform=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect()
    }

    #[test]
    fn reach_pose_swings_limbs_against_each_other() {
        let html = render_pose(StridePhase::Reach);
        assert!(html.contains(r#"data-frame="0""#));
        assert_eq!(
            rotations(&html),
            vec!["rotate(-20 30 30)", "rotate(20 30 58)", "rotate(-20 30 58)", "rotate(20 30 30)"]
        );
    }

    #[test]
    fn recover_pose_inverts_every_limb() {
        let html = render_pose(StridePhase::Recover);
        assert!(html.contains(r#"data-frame="1""#));
        assert_eq!(
            rotations(&html),
            vec!["rotate(20 30 30)", "rotate(-20 30 58)", "rotate(20 30 58)", "rotate(-20 30 30)"]
        );
    }

    #[test]
    fn image_page_has_runner_gif_and_open_sidebar() {
        let html = render_page(RunnerStyle::Image);
        assert!(html.contains("Treadmill Path Simulation"));
        assert!(html.contains(r#"src="/runner.gif""#));
        assert!(html.contains(r#"alt="Running character""#));
        assert!(html.contains("left: calc(20.8% + 10%)"));
        assert!(html.contains("Simulate Values"));
        assert!(!html.contains("stick-figure"));
    }

    #[test]
    fn figure_page_has_no_sidebar() {
        let html = render_page(RunnerStyle::Figure);
        assert!(html.contains("stick-figure"));
        assert!(html.contains(r#"data-frame="0""#));
        assert!(!html.contains("runner.gif"));
        assert!(!html.contains("Simulate Values"));
        assert!(!html.contains("Close sidebar"));
        assert!(!html.contains("Open sidebar"));
    }
}
