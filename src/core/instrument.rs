//! Navigationsinstrumente als Overlay: Geodreieck, Lineal und Zirkel.
//!
//! Instrumente ignorieren den Karten-Zoom: Sie behalten ihre Bildschirmgröße
//! und sind nur über ihren Drehpunkt (`anchor_world`) an der Karte verankert.
//! Lokale Koordinaten haben den Drehpunkt im Ursprung und sind unskaliert
//! (SVG-Einheiten, y nach unten).

mod compass;

pub use compass::{CompassGeometry, COMPASS_HINGE_LOCAL, COMPASS_HINGE_PICK_RADIUS};

use glam::Vec2;

/// Achsparalleles Rechteck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2D {
    /// Minimale Ecke
    pub min: Vec2,
    /// Maximale Ecke
    pub max: Vec2,
}

impl Bounds2D {
    /// Rechteck aus beliebig vielen Punkten.
    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    /// Vereinigung zweier Rechtecke.
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Rechteck um `amount` in alle Richtungen vergrößert.
    pub fn expand(self, amount: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(amount),
            max: self.max + Vec2::splat(amount),
        }
    }

    /// Prüft, ob der Punkt im Rechteck liegt (Ränder inklusive).
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Größe.
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Art des Instruments; die Reihenfolge ist zugleich die Zeichenreihenfolge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstrumentKind {
    /// Transportador (Halbkreis-Winkelmesser)
    Protractor,
    /// Regla
    Ruler,
    /// Compás mit zwei Schenkeln
    Compass,
}

impl InstrumentKind {
    /// Alle Instrumente von unten nach oben.
    pub const ALL: [InstrumentKind; 3] = [Self::Protractor, Self::Ruler, Self::Compass];

    /// Index in `InstrumentSet`.
    pub fn index(self) -> usize {
        match self {
            Self::Protractor => 0,
            Self::Ruler => 1,
            Self::Compass => 2,
        }
    }

    /// Anzeigename.
    pub fn label(self) -> &'static str {
        match self {
            Self::Protractor => "Protractor",
            Self::Ruler => "Ruler",
            Self::Compass => "Compass",
        }
    }

    /// Natürliche Größe des SVG-Assets (beim Zirkel: ein Schenkel).
    pub fn natural_size(self) -> Vec2 {
        match self {
            Self::Protractor => Vec2::new(290.0, 190.0),
            Self::Ruler => Vec2::new(1200.0, 200.0),
            Self::Compass => compass::LEG_SIZE,
        }
    }
}

/// Ein eingeblendetes oder verstecktes Instrument.
#[derive(Debug, Clone, PartialEq)]
pub struct Instrument {
    /// Art
    pub kind: InstrumentKind,
    /// Sichtbarkeit (Toolbar-Toggle)
    pub visible: bool,
    /// Drehpunkt in Welt-Koordinaten (Mitte bzw. Zirkel-Gelenk)
    pub anchor_world: Vec2,
    /// Drehung im Uhrzeigersinn (y nach unten) in Grad
    pub rotation_deg: f32,
    /// Einheitliche Skalierung SVG → Screen-Punkte
    pub scale: f32,
    /// Nur beim Zirkel gesetzt
    pub compass: Option<CompassGeometry>,
}

impl Instrument {
    /// Erstellt ein sichtbares Instrument mit an `target_size` angepasster Skalierung.
    pub fn new(kind: InstrumentKind, anchor_world: Vec2, target_size: Vec2) -> Self {
        let compass = (kind == InstrumentKind::Compass).then(CompassGeometry::default);
        let natural = kind.natural_size();
        let scale = uniform_scale(natural, target_size);
        Self {
            kind,
            visible: true,
            anchor_world,
            rotation_deg: 0.0,
            scale,
            compass,
        }
    }

    /// Unrotiertes lokales Begrenzungsrechteck.
    pub fn local_bounds(&self) -> Bounds2D {
        match &self.compass {
            Some(geometry) => geometry.bounding_rect(),
            None => {
                let half = self.kind.natural_size() * 0.5;
                Bounds2D {
                    min: -half,
                    max: half,
                }
            }
        }
    }

    /// Lokaler Punkt → viewport-lokaler Screen-Punkt.
    pub fn local_to_screen(&self, local: Vec2, pivot_screen: Vec2) -> Vec2 {
        pivot_screen + self.rotation().rotate(local * self.scale)
    }

    /// Viewport-lokaler Screen-Punkt → lokaler Punkt.
    pub fn screen_to_local(&self, screen: Vec2, pivot_screen: Vec2) -> Vec2 {
        let rot = self.rotation();
        let inverse = Vec2::new(rot.x, -rot.y);
        inverse.rotate(screen - pivot_screen) / self.scale.max(f32::EPSILON)
    }

    /// Treffer-Test in Screen-Koordinaten.
    pub fn contains_screen(&self, screen: Vec2, pivot_screen: Vec2) -> bool {
        let local = self.screen_to_local(screen, pivot_screen);
        match &self.compass {
            Some(geometry) => geometry.contains_local(local),
            None => self.local_bounds().contains(local),
        }
    }

    /// `true`, wenn `screen` über dem Zirkel-Gelenk liegt.
    pub fn hinge_hit(&self, screen: Vec2, pivot_screen: Vec2) -> bool {
        self.compass.is_some()
            && self.screen_to_local(screen, pivot_screen).length() <= COMPASS_HINGE_PICK_RADIUS
    }

    /// Ecken des Instrument-Bildes (Ruler/Protractor) im Uhrzeigersinn ab oben links.
    pub fn quad_screen(&self, pivot_screen: Vec2) -> [Vec2; 4] {
        let b = self.local_bounds();
        [
            Vec2::new(b.min.x, b.min.y),
            Vec2::new(b.max.x, b.min.y),
            Vec2::new(b.max.x, b.max.y),
            Vec2::new(b.min.x, b.max.y),
        ]
        .map(|p| self.local_to_screen(p, pivot_screen))
    }

    /// Verschiebt das Instrument um ein Screen-Delta.
    pub fn move_by_screen_delta(&mut self, delta: Vec2, zoom: f32) {
        self.anchor_world += delta / zoom.max(f32::EPSILON);
    }

    /// Dreht um `degrees` (positiv = im Uhrzeigersinn auf dem Bildschirm).
    pub fn rotate_by(&mut self, degrees: f32) {
        self.rotation_deg = (self.rotation_deg + degrees).rem_euclid(360.0);
    }

    /// Ändert die Zirkel-Öffnung um `steps` Rasten.
    ///
    /// Gibt `true` zurück, wenn sich die Öffnung geändert hat;
    /// bei Ruler/Protractor immer `false`.
    pub fn adjust_opening_steps(&mut self, steps: i32, step_deg: f32, min: f32, max: f32) -> bool {
        match &mut self.compass {
            Some(geometry) => geometry.adjust_opening(steps as f32 * step_deg, min, max),
            None => false,
        }
    }

    /// Welt-Positionen der beiden Zirkelspitzen (fest, beweglich).
    pub fn compass_tips_world(&self, zoom: f32) -> Option<(Vec2, Vec2)> {
        let geometry = self.compass.as_ref()?;
        let (fixed, moving) = geometry.tips_local();
        let to_world = |local: Vec2| {
            self.anchor_world + self.rotation().rotate(local * self.scale) / zoom.max(f32::EPSILON)
        };
        Some((to_world(fixed), to_world(moving)))
    }

    fn rotation(&self) -> Vec2 {
        Vec2::from_angle(self.rotation_deg.to_radians())
    }
}

/// Einheitliche Skalierung, sodass `natural` in `target` passt.
pub fn uniform_scale(natural: Vec2, target: Vec2) -> f32 {
    if natural.x <= 0.0 || natural.y <= 0.0 {
        return 1.0;
    }
    (target.x / natural.x).min(target.y / natural.y)
}

/// Die drei Instrumente; nicht erzeugte Slots sind `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstrumentSet {
    slots: [Option<Instrument>; 3],
}

impl InstrumentSet {
    /// Leerer Satz (nichts erzeugt).
    pub fn new() -> Self {
        Self::default()
    }

    /// Instrument per Art (falls schon erzeugt).
    pub fn get(&self, kind: InstrumentKind) -> Option<&Instrument> {
        self.slots[kind.index()].as_ref()
    }

    /// Mutables Instrument per Art.
    pub fn get_mut(&mut self, kind: InstrumentKind) -> Option<&mut Instrument> {
        self.slots[kind.index()].as_mut()
    }

    /// `true`, wenn das Instrument existiert und sichtbar ist.
    pub fn is_visible(&self, kind: InstrumentKind) -> bool {
        self.get(kind).is_some_and(|i| i.visible)
    }

    /// Blendet ein Instrument ein oder aus; beim ersten Einblenden wird es
    /// über `spawn` erzeugt. Gibt `true` zurück, wenn es dabei neu entstand.
    pub fn toggle(
        &mut self,
        kind: InstrumentKind,
        visible: bool,
        spawn: impl FnOnce() -> Instrument,
    ) -> bool {
        let slot = &mut self.slots[kind.index()];
        match slot {
            Some(instrument) => {
                instrument.visible = visible;
                false
            }
            None if visible => {
                *slot = Some(spawn());
                true
            }
            None => false,
        }
    }

    /// Sichtbare Instrumente von unten nach oben.
    pub fn visible(&self) -> impl DoubleEndedIterator<Item = &Instrument> {
        self.slots.iter().flatten().filter(|i| i.visible)
    }

    /// Oberstes sichtbares Instrument unter `screen`.
    pub fn topmost_at(
        &self,
        screen: Vec2,
        pivot_screen: impl Fn(&Instrument) -> Vec2,
    ) -> Option<InstrumentKind> {
        self.visible()
            .rev()
            .find(|i| i.contains_screen(screen, pivot_screen(i)))
            .map(|i| i.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn uniform_scale_uses_smaller_ratio() {
        assert_relative_eq!(
            uniform_scale(Vec2::new(1200.0, 200.0), Vec2::new(600.0, 100.0)),
            0.5
        );
        assert_relative_eq!(
            uniform_scale(Vec2::new(290.0, 190.0), Vec2::new(580.0, 380.0)),
            2.0
        );
        assert_relative_eq!(uniform_scale(Vec2::new(100.0, 100.0), Vec2::new(50.0, 400.0)), 0.5);
    }

    #[test]
    fn local_screen_roundtrip_with_rotation() {
        let mut ruler = Instrument::new(InstrumentKind::Ruler, Vec2::ZERO, Vec2::new(600.0, 100.0));
        ruler.rotate_by(37.0);
        let pivot = Vec2::new(300.0, 200.0);
        let local = Vec2::new(120.0, -40.0);
        let back = ruler.screen_to_local(ruler.local_to_screen(local, pivot), pivot);
        assert_relative_eq!(back.x, local.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, local.y, epsilon = 1e-3);
    }

    #[test]
    fn rotated_ruler_hit_test() {
        let mut ruler = Instrument::new(InstrumentKind::Ruler, Vec2::ZERO, Vec2::new(600.0, 100.0));
        let pivot = Vec2::new(400.0, 400.0);
        // Unrotiert: 300 px breit nach rechts, 50 px hoch
        assert!(ruler.contains_screen(Vec2::new(690.0, 400.0), pivot));
        assert!(!ruler.contains_screen(Vec2::new(400.0, 460.0), pivot));

        ruler.rotate_by(90.0);
        assert!(!ruler.contains_screen(Vec2::new(690.0, 400.0), pivot));
        assert!(ruler.contains_screen(Vec2::new(400.0, 690.0), pivot));
    }

    #[test]
    fn rotation_wraps_into_full_circle() {
        let mut p = Instrument::new(InstrumentKind::Protractor, Vec2::ZERO, Vec2::ONE);
        p.rotate_by(-1.5);
        assert_relative_eq!(p.rotation_deg, 358.5);
        p.rotate_by(3.0);
        assert_relative_eq!(p.rotation_deg, 1.5);
    }

    #[test]
    fn move_converts_screen_delta_to_world() {
        let mut p = Instrument::new(InstrumentKind::Protractor, Vec2::new(10.0, 10.0), Vec2::ONE);
        p.move_by_screen_delta(Vec2::new(20.0, -4.0), 0.2);
        assert_relative_eq!(p.anchor_world.x, 110.0);
        assert_relative_eq!(p.anchor_world.y, -10.0);
    }

    #[test]
    fn opening_only_changes_compass() {
        let mut ruler = Instrument::new(InstrumentKind::Ruler, Vec2::ZERO, Vec2::ONE);
        assert!(!ruler.adjust_opening_steps(1, 2.0, 5.0, 150.0));

        let mut compass =
            Instrument::new(InstrumentKind::Compass, Vec2::ZERO, Vec2::new(220.0, 360.0));
        assert!(compass.adjust_opening_steps(2, 2.0, 5.0, 150.0));
        assert_relative_eq!(
            compass.compass.as_ref().map(|c| c.opening_deg).unwrap_or_default(),
            39.0
        );
    }

    #[test]
    fn toggle_creates_once_and_keeps_state() {
        let mut set = InstrumentSet::new();
        assert!(!set.toggle(InstrumentKind::Ruler, false, || unreachable!()));
        assert!(set.get(InstrumentKind::Ruler).is_none());

        assert!(set.toggle(InstrumentKind::Ruler, true, || {
            Instrument::new(InstrumentKind::Ruler, Vec2::new(5.0, 5.0), Vec2::ONE)
        }));
        if let Some(ruler) = set.get_mut(InstrumentKind::Ruler) {
            ruler.rotate_by(10.0);
        }
        assert!(!set.toggle(InstrumentKind::Ruler, false, || unreachable!()));
        assert!(!set.is_visible(InstrumentKind::Ruler));
        assert!(!set.toggle(InstrumentKind::Ruler, true, || unreachable!()));
        assert_relative_eq!(
            set.get(InstrumentKind::Ruler).map(|r| r.rotation_deg).unwrap_or_default(),
            10.0
        );
    }

    #[test]
    fn topmost_prefers_compass_over_ruler() {
        let mut set = InstrumentSet::new();
        set.toggle(InstrumentKind::Ruler, true, || {
            Instrument::new(InstrumentKind::Ruler, Vec2::ZERO, Vec2::new(600.0, 100.0))
        });
        set.toggle(InstrumentKind::Compass, true, || {
            Instrument::new(InstrumentKind::Compass, Vec2::ZERO, Vec2::new(220.0, 360.0))
        });
        let pivot = |_: &Instrument| Vec2::new(400.0, 400.0);
        assert_eq!(
            set.topmost_at(Vec2::new(400.0, 400.0), pivot),
            Some(InstrumentKind::Compass)
        );
        assert_eq!(
            set.topmost_at(Vec2::new(680.0, 400.0), pivot),
            Some(InstrumentKind::Ruler)
        );
        assert_eq!(set.topmost_at(Vec2::new(10.0, 10.0), pivot), None);
    }
}
