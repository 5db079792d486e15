//! DOM view layer (wasm32 only)
//!
//! The view mirrors the sim, never the reverse: entity elements are created
//! and removed in response to [`GameEvent`]s, and their movement is a single
//! CSS transition matching the entity's `Travel`. Logical state never comes
//! back out of the DOM.

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::center_of;
use crate::consts::{DEFENDER_ANCHOR, DEFENDER_RADIUS};
use crate::sim::{GameEvent, GameState, Obstacle, Projectile};

/// Handles to the static page elements plus the document for entity churn
pub struct DomView {
    document: Document,
    body: HtmlElement,
    planet: HtmlElement,
    reticle: HtmlElement,
    scoreboard: HtmlElement,
    banner: HtmlElement,
}

fn require(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id} element")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("#{id} is not an HtmlElement")))
}

/// Center of a rendered element's bounding box, in viewport coordinates
pub fn element_center(el: &Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    center_of(
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
    )
}

impl DomView {
    pub fn new(document: Document) -> Result<Self, JsValue> {
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("no document body"))?;

        let planet = require(&document, "planet")?;
        // The sim targets a fixed anchor; the page layout has to agree
        let rendered = element_center(&planet);
        if rendered.distance(DEFENDER_ANCHOR) > DEFENDER_RADIUS {
            log::warn!(
                "#planet renders at ({:.0}, {:.0}) but obstacles target ({:.0}, {:.0})",
                rendered.x,
                rendered.y,
                DEFENDER_ANCHOR.x,
                DEFENDER_ANCHOR.y
            );
        }

        Ok(Self {
            planet,
            reticle: require(&document, "reticle")?,
            scoreboard: require(&document, "scoreboard")?,
            banner: require(&document, "game-over")?,
            body,
            document,
        })
    }

    /// React to this frame's events, then refresh the per-frame rotations
    pub fn apply(&self, state: &GameState, events: &[GameEvent]) -> Result<(), JsValue> {
        for event in events {
            match *event {
                GameEvent::ObstacleSpawned { id } => {
                    if let Some(o) = state.obstacles.iter().find(|o| o.id == id) {
                        self.insert_obstacle(o)?;
                    }
                }
                GameEvent::ProjectileFired { id } => {
                    if let Some(p) = state.projectiles.iter().find(|p| p.id == id) {
                        self.insert_projectile(p)?;
                    }
                }
                GameEvent::ObstacleShot {
                    obstacle,
                    projectile,
                } => {
                    self.remove_entity(&format!("o{obstacle}"));
                    self.remove_entity(&format!("s{projectile}"));
                    self.scoreboard
                        .set_text_content(Some(&state.score.to_string()));
                }
                GameEvent::Defeat { score } => self.show_defeat(score)?,
            }
        }

        self.reticle
            .style()
            .set_property("transform", &format!("rotate({}rad)", state.aim_theta))?;
        self.planet.style().set_property(
            "transform",
            &format!("rotate({}deg)", state.planet_spin_deg),
        )?;
        Ok(())
    }

    fn insert_obstacle(&self, obstacle: &Obstacle) -> Result<(), JsValue> {
        let el = self.insert_entity(
            &format!("o{}", obstacle.id),
            &format!("obstacle {}", obstacle.size.as_str()),
            &obstacle.travel.from,
        )?;
        animate(&el, obstacle.travel.delta, obstacle.travel.duration_secs)
    }

    fn insert_projectile(&self, projectile: &Projectile) -> Result<(), JsValue> {
        let el = self.insert_entity(
            &format!("s{}", projectile.id),
            "shot",
            &projectile.travel.from,
        )?;
        animate(&el, projectile.travel.delta, projectile.travel.duration_secs)
    }

    fn insert_entity(&self, id: &str, class: &str, at: &Vec2) -> Result<HtmlElement, JsValue> {
        let el: HtmlElement = self
            .document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| JsValue::from_str("created element is not an HtmlElement"))?;
        el.set_id(id);
        el.set_class_name(class);
        el.style().set_property("left", &format!("{}px", at.x))?;
        el.style().set_property("top", &format!("{}px", at.y))?;
        self.body.append_child(&el)?;
        Ok(el)
    }

    fn remove_entity(&self, id: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.remove();
        }
    }

    fn show_defeat(&self, score: u32) -> Result<(), JsValue> {
        let doomed = self.document.query_selector_all(".obstacle, .shot")?;
        for i in 0..doomed.length() {
            if let Some(el) = doomed.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                el.remove();
            }
        }
        self.scoreboard
            .set_text_content(Some(&format!("Your score is: {score}")));
        self.banner.style().set_property("display", "block")?;
        Ok(())
    }
}

/// One fire-and-forget CSS transition, the DOM twin of a sim `Travel`
fn animate(el: &HtmlElement, delta: Vec2, duration_secs: f32) -> Result<(), JsValue> {
    el.style().set_property(
        "transition",
        &format!("transform {duration_secs}s linear"),
    )?;
    el.style().set_property(
        "transform",
        &format!("translate({}px, {}px)", delta.x, delta.y),
    )
}
