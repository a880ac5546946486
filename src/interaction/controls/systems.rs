use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::ui::RelativeCursorPosition;

use super::panel::gravity_label;
use super::types::*;
use crate::core::config::GameConfig;
use crate::gameplay::events::{AddPlayer, PlayerAddOutcome, ResetRound, SelectStage, SetGravity};
use crate::gameplay::roster::Roster;
use crate::gameplay::winner::RaceResult;
use crate::physics::gravity::gravity::GravitySetting;
use crate::rendering::stage::CurrentStage;

/// Typed characters edit the name draft; Enter submits it.
pub fn name_field_input(
    mut keys: EventReader<KeyboardInput>,
    mut draft: ResMut<NameDraft>,
    mut adds: EventWriter<AddPlayer>,
) {
    for ev in keys.read() {
        if ev.state != ButtonState::Pressed {
            continue;
        }
        match &ev.logical_key {
            Key::Character(s) => {
                draft.push_str(s);
            }
            Key::Space => {
                draft.push_str(" ");
            }
            Key::Backspace => {
                draft.backspace();
            }
            Key::Enter => submit_draft(&mut draft, &mut adds),
            _ => {}
        }
    }
}

fn submit_draft(draft: &mut NameDraft, adds: &mut EventWriter<AddPlayer>) {
    let name = draft.take();
    debug!(target: "controls", "Submitting name '{name}'");
    adds.write(AddPlayer(name));
}

pub fn gravity_keys(
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<GameConfig>,
    gravity: Res<GravitySetting>,
    mut out: EventWriter<SetGravity>,
) {
    let step = cfg.gravity.key_step;
    let mut target = gravity.magnitude();
    if keys.just_pressed(KeyCode::ArrowUp) {
        target += step;
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        target -= step;
    }
    let target = target.clamp(0.0, gravity.max());
    if target != gravity.magnitude() {
        out.write(SetGravity(target));
    }
}

/// Dragging on the slider track sets gravity from the cursor position.
pub fn gravity_slider_drag(
    slider: Query<(&Interaction, &RelativeCursorPosition), With<GravitySlider>>,
    gravity: Res<GravitySetting>,
    mut out: EventWriter<SetGravity>,
) {
    for (interaction, rel) in &slider {
        if *interaction != Interaction::Pressed {
            continue;
        }
        if let Some(n) = rel.normalized {
            let target = slider_fraction(n) * gravity.max();
            if target != gravity.magnitude() {
                out.write(SetGravity(target));
            }
        }
    }
}

pub fn control_buttons(
    buttons: Query<(&Interaction, &ControlButton), Changed<Interaction>>,
    mut draft: ResMut<NameDraft>,
    mut adds: EventWriter<AddPlayer>,
    mut resets: EventWriter<ResetRound>,
    mut stages: EventWriter<SelectStage>,
) {
    for (interaction, kind) in &buttons {
        if *interaction != Interaction::Pressed {
            continue;
        }
        info!(target: "controls", "Pressed {kind:?}");
        match *kind {
            ControlButton::AddPlayer => submit_draft(&mut draft, &mut adds),
            ControlButton::Reset => {
                resets.write(ResetRound);
            }
            ControlButton::Stage(stage) => {
                stages.write(SelectStage(stage));
            }
        }
    }
}

pub fn button_colors(
    current: Res<CurrentStage>,
    mut buttons: Query<(&Interaction, &ControlButton, &mut BackgroundColor)>,
) {
    for (interaction, kind, mut bg) in &mut buttons {
        let selected = matches!(kind, ControlButton::Stage(s) if *s == current.0);
        let color = match *interaction {
            Interaction::Pressed => BUTTON_PRESSED,
            Interaction::Hovered => BUTTON_HOVER,
            Interaction::None if selected => BUTTON_SELECTED,
            Interaction::None => BUTTON_IDLE,
        };
        bg.set_if_neq(BackgroundColor(color));
    }
}

pub fn record_add_feedback(mut outcomes: EventReader<PlayerAddOutcome>, mut draft: ResMut<NameDraft>) {
    if let Some(last) = outcomes.read().last() {
        draft.feedback = match last {
            PlayerAddOutcome::Added(_) => None,
            PlayerAddOutcome::Rejected(reason) => Some(reason.clone()),
        };
    }
}

pub fn refresh_name_field(
    draft: Res<NameDraft>,
    mut field: Query<&mut Text, (With<NameFieldText>, Without<FeedbackText>)>,
    mut feedback: Query<&mut Text, (With<FeedbackText>, Without<NameFieldText>)>,
) {
    if !draft.is_changed() {
        return;
    }
    if let Ok(mut t) = field.single_mut() {
        t.0 = format!("{}|", draft.text());
    }
    if let Ok(mut t) = feedback.single_mut() {
        t.0 = draft.feedback.clone().unwrap_or_default();
    }
}

pub fn refresh_gravity_widgets(
    gravity: Res<GravitySetting>,
    mut label: Query<&mut Text, With<GravityLabel>>,
    mut fill: Query<&mut Node, With<GravityFill>>,
) {
    if !gravity.is_changed() {
        return;
    }
    if let Ok(mut t) = label.single_mut() {
        t.0 = gravity_label(gravity.magnitude());
    }
    if let Ok(mut n) = fill.single_mut() {
        n.width = Val::Percent(gravity.fraction() * 100.0);
    }
}

pub fn refresh_roster_text(roster: Res<Roster>, mut text: Query<&mut Text, With<RosterText>>) {
    if !roster.is_changed() {
        return;
    }
    if let Ok(mut t) = text.single_mut() {
        t.0 = if roster.is_empty() {
            "No players yet".to_string()
        } else {
            format!("Players ({}): {}", roster.len(), roster.names().join(", "))
        };
    }
}

pub fn refresh_winner_banner(
    result: Res<RaceResult>,
    mut banner: Query<&mut Text, (With<WinnerBanner>, Without<FinishOrderText>)>,
    mut order: Query<&mut Text, (With<FinishOrderText>, Without<WinnerBanner>)>,
) {
    if !result.is_changed() {
        return;
    }
    if let Ok(mut t) = banner.single_mut() {
        t.0 = banner_text(&result);
    }
    if let Ok(mut t) = order.single_mut() {
        t.0 = finish_order_text(&result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key, code: KeyCode) -> KeyboardInput {
        KeyboardInput {
            key_code: code,
            logical_key: key,
            state: ButtonState::Pressed,
            text: None,
            repeat: false,
            window: Entity::PLACEHOLDER,
        }
    }

    #[test]
    fn typing_then_enter_submits_name() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<KeyboardInput>()
            .add_event::<AddPlayer>()
            .insert_resource(NameDraft::new(24))
            .add_systems(Update, name_field_input);

        for (k, c) in [("E", KeyCode::KeyE), ("m", KeyCode::KeyM), ("x", KeyCode::KeyX)] {
            app.world_mut().send_event(press(Key::Character(k.into()), c));
        }
        app.world_mut().send_event(press(Key::Backspace, KeyCode::Backspace));
        app.world_mut().send_event(press(Key::Character("ma".into()), KeyCode::KeyM));
        app.world_mut().send_event(press(Key::Enter, KeyCode::Enter));
        app.update();

        let events = app.world().resource::<Events<AddPlayer>>();
        let names: Vec<String> = events.iter_current_update_events().map(|e| e.0.clone()).collect();
        assert_eq!(names, vec!["Emma".to_string()]);
        assert_eq!(app.world().resource::<NameDraft>().text(), "");
    }

    #[test]
    fn arrow_keys_step_gravity_within_range() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<ButtonInput<KeyCode>>()
            .add_event::<SetGravity>()
            .insert_resource(GameConfig::default())
            .insert_resource(GravitySetting::new(0.0, 100.0))
            .add_systems(Update, gravity_keys);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::ArrowDown);
        app.update();
        // already at the floor of the range
        assert_eq!(app.world().resource::<Events<SetGravity>>().len(), 0);

        {
            let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keys.release(KeyCode::ArrowDown);
            keys.clear();
            keys.press(KeyCode::ArrowUp);
        }
        app.update();
        let events = app.world().resource::<Events<SetGravity>>();
        let sent: Vec<f32> = events.iter_current_update_events().map(|e| e.0).collect();
        assert_eq!(sent, vec![5.0]);
    }

    fn slider_app(start: f32) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<SetGravity>()
            .insert_resource(GravitySetting::new(start, 100.0))
            .add_systems(Update, gravity_slider_drag);
        app
    }

    fn sent_gravity(app: &App) -> Vec<f32> {
        app.world()
            .resource::<Events<SetGravity>>()
            .iter_current_update_events()
            .map(|e| e.0)
            .collect()
    }

    #[test]
    fn slider_track_spans_full_range() {
        for (x, expected) in [(0.0, 0.0), (0.25, 25.0), (1.0, 100.0)] {
            let mut app = slider_app(30.0);
            app.world_mut().spawn((
                GravitySlider,
                Interaction::Pressed,
                RelativeCursorPosition {
                    normalized: Some(Vec2::new(x, 0.5)),
                    ..default()
                },
            ));
            app.update();
            assert_eq!(sent_gravity(&app), vec![expected], "cursor x={x}");
        }
    }

    #[test]
    fn slider_ignores_hover() {
        let mut app = slider_app(30.0);
        app.world_mut().spawn((
            GravitySlider,
            Interaction::Hovered,
            RelativeCursorPosition {
                normalized: Some(Vec2::new(0.9, 0.5)),
                ..default()
            },
        ));
        app.update();
        assert!(sent_gravity(&app).is_empty());
    }
}
