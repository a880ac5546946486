//! UI layout: control column on the left, stage row along the bottom, winner banner on top.

use bevy::prelude::*;
use bevy::ui::RelativeCursorPosition;

use super::types::*;
use crate::physics::gravity::gravity::GravitySetting;
use crate::rendering::palette::palette::WINNER_BANNER;
use crate::rendering::stage::Stage;

const PANEL_WIDTH: f32 = 260.0;
const FONT_SIZE: f32 = 16.0;

pub fn spawn_control_panel(mut commands: Commands, gravity: Res<GravitySetting>) {
    commands
        .spawn((
            ControlPanel,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                left: Val::Px(12.0),
                width: Val::Px(PANEL_WIDTH),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                padding: UiRect::all(Val::Px(10.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.45)),
        ))
        .with_children(|col| {
            col.spawn(label("Player name", FONT_SIZE, Color::WHITE));
            col.spawn((
                Node {
                    width: Val::Percent(100.0),
                    padding: UiRect::axes(Val::Px(6.0), Val::Px(4.0)),
                    border: UiRect::all(Val::Px(1.0)),
                    ..default()
                },
                BorderColor(Color::srgb(0.6, 0.6, 0.7)),
                BackgroundColor(Color::srgba(0.1, 0.1, 0.15, 0.9)),
            ))
            .with_children(|field| {
                field.spawn((NameFieldText, label("|", FONT_SIZE, Color::WHITE)));
            });
            col.spawn((
                FeedbackText,
                label("", FONT_SIZE - 3.0, Color::srgb(1.0, 0.75, 0.4)),
            ));
            col.spawn(Node {
                column_gap: Val::Px(8.0),
                ..default()
            })
            .with_children(|row| {
                button(row, ControlButton::AddPlayer, "Add player");
                button(row, ControlButton::Reset, "Reset");
            });
            col.spawn((
                GravityLabel,
                label(&gravity_label(gravity.magnitude()), FONT_SIZE, Color::WHITE),
            ));
            col.spawn((
                GravitySlider,
                Button,
                RelativeCursorPosition::default(),
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Px(14.0),
                    border: UiRect::all(Val::Px(1.0)),
                    ..default()
                },
                BorderColor(Color::srgb(0.6, 0.6, 0.7)),
                BackgroundColor(Color::srgba(0.1, 0.1, 0.15, 0.9)),
            ))
            .with_children(|track| {
                track.spawn((
                    GravityFill,
                    Node {
                        width: Val::Percent(gravity.fraction() * 100.0),
                        height: Val::Percent(100.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.35, 0.6, 0.95)),
                ));
            });
            col.spawn((
                RosterText,
                label("", FONT_SIZE - 2.0, Color::srgb(0.8, 0.85, 0.9)),
            ));
        });

    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(12.0),
            left: Val::Px(12.0),
            right: Val::Px(12.0),
            justify_content: JustifyContent::Center,
            flex_wrap: FlexWrap::Wrap,
            column_gap: Val::Px(6.0),
            row_gap: Val::Px(6.0),
            ..default()
        })
        .with_children(|row| {
            for stage in Stage::ALL {
                button(row, ControlButton::Stage(stage), stage.display_name());
            }
        });

    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(16.0),
            width: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            row_gap: Val::Px(4.0),
            ..default()
        })
        .with_children(|top| {
            top.spawn((WinnerBanner, label("", 48.0, WINNER_BANNER)));
            top.spawn((FinishOrderText, label("", FONT_SIZE, Color::WHITE)));
        });
}

pub fn gravity_label(magnitude: f32) -> String {
    format!("Gravity: {magnitude:.0}  (Up/Down)")
}

fn label(text: &str, size: f32, color: Color) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
    )
}

fn button(parent: &mut ChildSpawnerCommands, kind: ControlButton, text: &str) {
    parent
        .spawn((
            kind,
            Button,
            Node {
                padding: UiRect::axes(Val::Px(10.0), Val::Px(5.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BorderColor(Color::srgb(0.5, 0.5, 0.6)),
            BackgroundColor(BUTTON_IDLE),
        ))
        .with_children(|b| {
            b.spawn(label(text, FONT_SIZE - 1.0, Color::WHITE));
        });
}
