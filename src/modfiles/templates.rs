//! Text templates for the files the game reads.
//!
//! Every renderer is a pure function of the album, so reruns with the same
//! input produce byte-identical files.

use crate::library::Album;

/// Marker written at the start of localisation files; the game's loader
/// requires UTF-8 with BOM.
pub const UTF8_BOM: &str = "\u{feff}";

/// Playback volume applied to every song in the asset manifest.
pub const SONG_VOLUME: &str = "0.65";

/// Frames in the station texture: plain cover and cover with overlay.
pub const ART_FRAMES: u32 = 2;

const ALBUM_PLACEHOLDER: &str = "{album}";

/// Music player chrome and the station picker tile. Only `{album}` varies;
/// everything else must stay exactly as the game's own layout expects.
const GUI_TEMPLATE: &str = r#"guiTypes = {
            containerWindowType = {
                name = "{album}_faceplate"
                position = { x =0 y=0 }
                size = { width = 590 height = 46 }

                iconType ={
                    name ="musicplayer_header_bg"
                    spriteType = "GFX_musicplayer_header_bg"
                    position = { x= 0 y = 0 }
                    alwaystransparent = yes
                }

                instantTextboxType = {
                    name = "track_name"
                    position = { x = 72 y = 20 }
                    font = "hoi_20b"
                    text = "Track Name"
                    maxWidth = 450
                    maxHeight = 25
                    format = center
                }

                instantTextboxType = {
                    name = "track_elapsed"
                    position = { x = 124 y = 30 }
                    font = "hoi_18b"
                    text = "00:00"
                    maxWidth = 50
                    maxHeight = 25
                    format = center
                }

                instantTextboxType = {
                    name = "track_duration"
                    position = { x = 420 y = 30 }
                    font = "hoi_18b"
                    text = "02:58"
                    maxWidth = 50
                    maxHeight = 25
                    format = center
                }

                buttonType = {
                    name = "prev_button"
                    position = { x = 220 y = 20 }
                    quadTextureSprite ="GFX_musicplayer_previous_button"
                    buttonFont = "Main_14_black"
                    Orientation = "LOWER_LEFT"
                    clicksound = click_close
                    pdx_tooltip = "MUSICPLAYER_PREV"
                }

                buttonType = {
                    name = "play_button"
                    position = { x = 263 y = 20 }
                    quadTextureSprite ="GFX_musicplayer_play_pause_button"
                    buttonFont = "Main_14_black"
                    Orientation = "LOWER_LEFT"
                    clicksound = click_close
                }

                buttonType = {
                    name = "next_button"
                    position = { x = 336 y = 20 }
                    quadTextureSprite ="GFX_musicplayer_next_button"
                    buttonFont = "Main_14_black"
                    Orientation = "LOWER_LEFT"
                    clicksound = click_close
                    pdx_tooltip = "MUSICPLAYER_NEXT"
                }

                extendedScrollbarType = {
                    name = "volume_slider"
                    position = { x = 100 y = 45}
                    size = { width = 75 height = 18 }
                    tileSize = { width = 12 height = 12}
                    maxValue =100
                    minValue =0
                    stepSize =1
                    startValue = 50
                    horizontal = yes
                    orientation = lower_left
                    origo = lower_left
                    setTrackFrameOnChange = yes

                slider = {
                        name = "Slider"    
                        quadTextureSprite = "GFX_scroll_drager"
                        position = { x=0 y = 1 }
                        pdx_tooltip = "MUSICPLAYER_ADJUST_VOL"
                    }

                track = {
                    name = "Track"
                    quadTextureSprite = "GFX_volume_track"
                    position = { x=0 y = 3 }
                    alwaystransparent = yes
                    pdx_tooltip = "MUSICPLAYER_ADJUST_VOL"
                }
            }

                buttonType = {
                    name = "shuffle_button"
                    position = { x = 425 y = 20 }
                    quadTextureSprite ="GFX_toggle_shuffle_buttons"
                    buttonFont = "Main_14_black"
                    Orientation = "LOWER_LEFT"
                    clicksound = click_close
                }
            }

            containerWindowType={
                name = "{album}_stations_entry"
                size = { width = 162 height = 130 }
        
                checkBoxType = {
                    name = "select_station_button"
                    position = { x = 0 y = 0 }
                    quadTextureSprite = "GFX_{album}_album_art"
                    clicksound = decisions_ui_button
                }
            }
        }"#;

/// `music/<album>/<album>.txt`: the station and its weighted song list.
pub fn render_playlist(album: &Album) -> String {
    let mut out = format!("music_station = \"{}\"\n", album.name());
    for track in album.tracks() {
        out.push('\n');
        out.push_str("music = {\n");
        out.push_str(&format!("    song = \"{}\"\n", track.id));
        out.push_str("    chance = {\n");
        out.push_str("      modifier = { factor = 1 }\n");
        out.push_str("    }\n");
        out.push_str("}\n");
    }
    out
}

/// `music/<album>/<album>.asset`: maps each song id to its audio file.
pub fn render_asset(album: &Album) -> String {
    let mut out = String::new();
    for track in album.tracks() {
        out.push_str("music = {\n");
        out.push_str(&format!("    name = \"{}\"\n", track.id));
        out.push_str(&format!("    file = \"{}\"\n", track.output_file_name()));
        out.push_str(&format!("    volume = {SONG_VOLUME}\n"));
        out.push_str("}\n");
    }
    out
}

/// `localisation/english/<album>_l_english.yml`, BOM included.
pub fn render_localisation(album: &Album) -> String {
    let name = album.name();
    let mut out = format!("{UTF8_BOM}l_english:\n {name}_TITLE:0 \"{name} Radio\"\n");
    for track in album.tracks() {
        out.push_str(&format!("  {id}:0 \"{id}\"\n", id = track.id));
    }
    out
}

/// `interface/<album>.gui`.
pub fn render_gui(album: &Album) -> String {
    GUI_TEMPLATE.replace(ALBUM_PLACEHOLDER, album.name())
}

/// `interface/<album>.gfx`: the sprite pointing at the baked texture.
pub fn render_gfx(album: &Album) -> String {
    let sprite = album.art_sprite();
    format!(
        "spriteTypes = {{\n    spriteType = {{\n        name = \"{sprite}\"\n        texturefile = \"gfx/{sprite}.dds\"\n        noOfFrames = {ART_FRAMES}\n    }}\n}}\n"
    )
}
