use eframe_painter::{Channel, ColorModel};
use egui::Color32;

#[test]
fn test_default_color_is_red() {
    let color = ColorModel::new();

    assert_eq!(color.channel(Channel::Red), 255);
    assert_eq!(color.channel(Channel::Green), 0);
    assert_eq!(color.channel(Channel::Blue), 0);
    assert_eq!(color.current_color(), Color32::from_rgb(255, 0, 0));
}

#[test]
fn test_set_channel_updates_composite() {
    let mut color = ColorModel::new();

    color.set_channel(Channel::Red, 10);
    color.set_channel(Channel::Green, 20);
    color.set_channel(Channel::Blue, 30);

    assert_eq!(color.channel(Channel::Red), 10);
    assert_eq!(color.channel(Channel::Green), 20);
    assert_eq!(color.channel(Channel::Blue), 30);
    assert_eq!(color.current_color(), Color32::from_rgb(10, 20, 30));
}

#[test]
fn test_channels_are_independent() {
    let mut color = ColorModel::new();

    color.set_channel(Channel::Green, 128);

    // The other channels keep their previous values
    assert_eq!(color.channel(Channel::Red), 255);
    assert_eq!(color.channel(Channel::Blue), 0);
}

#[test]
fn test_current_color_is_a_pure_read() {
    let color = ColorModel::new();
    let before = color.clone();

    assert_eq!(color.current_color(), color.current_color());
    assert_eq!(color, before);
}

#[test]
fn test_channel_labels() {
    let labels: Vec<&str> = Channel::ALL.iter().map(|c| c.label()).collect();
    assert_eq!(labels, ["R", "G", "B"]);
}
