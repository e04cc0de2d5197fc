//! Component tree of a parsed calendar (RFC 5545 §3.4-3.6).

use std::fmt;

use super::Property;
use super::property::names;

/// Kinds of component the repair pipeline distinguishes. Anything else is
/// carried as [`ComponentKind::Unknown`] under its original name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Calendar,
    Event,
    Todo,
    Journal,
    FreeBusy,
    Timezone,
    Alarm,
    Standard,
    Daylight,
    Unknown,
}

const KNOWN_KINDS: [(ComponentKind, &str); 9] = [
    (ComponentKind::Calendar, "VCALENDAR"),
    (ComponentKind::Event, "VEVENT"),
    (ComponentKind::Todo, "VTODO"),
    (ComponentKind::Journal, "VJOURNAL"),
    (ComponentKind::FreeBusy, "VFREEBUSY"),
    (ComponentKind::Timezone, "VTIMEZONE"),
    (ComponentKind::Alarm, "VALARM"),
    (ComponentKind::Standard, "STANDARD"),
    (ComponentKind::Daylight, "DAYLIGHT"),
];

impl ComponentKind {
    /// Wire name of the kind. `Unknown` has no wire name of its own; the
    /// component keeps the name it was parsed with.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        KNOWN_KINDS
            .iter()
            .find_map(|&(kind, name)| (kind == self).then_some(name))
            .unwrap_or("X-UNKNOWN")
    }

    /// Case-insensitive lookup by wire name.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        KNOWN_KINDS
            .iter()
            .find_map(|&(kind, name)| name.eq_ignore_ascii_case(s).then_some(kind))
            .unwrap_or(Self::Unknown)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `BEGIN:<name>` ... `END:<name>` block.
///
/// Properties stay in document order and are matched by name on lookup,
/// so repeated, unknown and `X-` properties survive untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub kind: ComponentKind,
    /// Upper-cased name as written, which matters for unknown kinds.
    pub name: String,
    pub properties: Vec<Property>,
    pub children: Vec<Component>,
}

impl Component {
    #[must_use]
    pub fn new(kind: ComponentKind) -> Self {
        Self::named(kind, kind.as_str().to_string())
    }

    /// Builds a component from a `BEGIN` value, resolving its kind.
    #[must_use]
    pub fn custom(name: impl Into<String>) -> Self {
        let name = name.into().to_ascii_uppercase();
        Self::named(ComponentKind::parse(&name), name)
    }

    fn named(kind: ComponentKind, name: String) -> Self {
        Self {
            kind,
            name,
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn event() -> Self {
        Self::new(ComponentKind::Event)
    }

    pub fn add_property(&mut self, prop: Property) {
        self.properties.push(prop);
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.properties
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        self.position_of(name).map(|i| &self.properties[i])
    }

    #[must_use]
    pub fn get_property_mut(&mut self, name: &str) -> Option<&mut Property> {
        self.position_of(name).map(|i| &mut self.properties[i])
    }

    /// Every occurrence of a repeatable property, in document order.
    #[must_use]
    pub fn get_properties(&self, name: &str) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|p| p.name.eq_ignore_ascii_case(name))
            .collect()
    }

    /// Raw value of the first property called `name`.
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.get_property(name).map(|p| p.value.as_str())
    }

    /// True when the property is present with a non-blank value. A blank
    /// value counts as absent for every repair rule.
    #[must_use]
    pub fn has_value(&self, name: &str) -> bool {
        self.get_property(name).is_some_and(|p| !p.is_blank())
    }

    /// ## Summary
    /// Puts `prop` where the first property of the same name sits, or at the
    /// end if there is none.
    ///
    /// Returns the property that was replaced.
    pub fn set_property(&mut self, prop: Property) -> Option<Property> {
        if let Some(i) = self.position_of(&prop.name) {
            return Some(std::mem::replace(&mut self.properties[i], prop));
        }
        self.properties.push(prop);
        None
    }

    /// Returns how many properties were dropped.
    pub fn remove_property(&mut self, name: &str) -> usize {
        let before = self.properties.len();
        self.properties.retain(|p| !p.name.eq_ignore_ascii_case(name));
        before - self.properties.len()
    }

    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.value_of(names::UID)
    }

    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.value_of(names::SUMMARY)
    }

    #[must_use]
    pub fn children_of_kind(&self, kind: ComponentKind) -> Vec<&Component> {
        self.children.iter().filter(|c| c.kind == kind).collect()
    }

    pub fn children_of_kind_mut(
        &mut self,
        kind: ComponentKind,
    ) -> impl Iterator<Item = &mut Component> {
        self.children.iter_mut().filter(move |c| c.kind == kind)
    }

    pub fn retain_children(&mut self, keep: impl FnMut(&Component) -> bool) {
        self.children.retain(keep);
    }

    #[must_use]
    pub fn events(&self) -> Vec<&Component> {
        self.children_of_kind(ComponentKind::Event)
    }

    #[must_use]
    pub fn todos(&self) -> Vec<&Component> {
        self.children_of_kind(ComponentKind::Todo)
    }

    #[must_use]
    pub fn alarms(&self) -> Vec<&Component> {
        self.children_of_kind(ComponentKind::Alarm)
    }

    pub fn alarms_mut(&mut self) -> impl Iterator<Item = &mut Component> {
        self.children_of_kind_mut(ComponentKind::Alarm)
    }
}

/// A whole calendar document: the VCALENDAR component and everything in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ICalendar {
    pub root: Component,
}

impl ICalendar {
    /// An empty 2.0 calendar carrying only VERSION and PRODID.
    #[must_use]
    pub fn new(prodid: &str) -> Self {
        let mut root = Component::new(ComponentKind::Calendar);
        root.add_property(Property::new(names::VERSION, "2.0"));
        root.add_property(Property::text(names::PRODID, prodid));
        Self { root }
    }

    #[must_use]
    pub fn prodid(&self) -> Option<&str> {
        self.root.value_of(names::PRODID)
    }

    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.root.value_of(names::VERSION)
    }

    /// CALSCALE as written; `None` does not imply GREGORIAN here.
    #[must_use]
    pub fn calscale(&self) -> Option<&str> {
        self.root.value_of(names::CALSCALE)
    }

    pub fn add_event(&mut self, event: Component) {
        self.root.children.push(event);
    }

    #[must_use]
    pub fn events(&self) -> Vec<&Component> {
        self.root.events()
    }

    #[must_use]
    pub fn todos(&self) -> Vec<&Component> {
        self.root.todos()
    }

    pub fn events_mut(&mut self) -> impl Iterator<Item = &mut Component> {
        self.root.children_of_kind_mut(ComponentKind::Event)
    }

    pub fn todos_mut(&mut self) -> impl Iterator<Item = &mut Component> {
        self.root.children_of_kind_mut(ComponentKind::Todo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_lookup_ignores_case() {
        assert_eq!(ComponentKind::parse("VEVENT"), ComponentKind::Event);
        assert_eq!(ComponentKind::parse("vtodo"), ComponentKind::Todo);
        assert_eq!(ComponentKind::parse("X-CUSTOM"), ComponentKind::Unknown);
        assert_eq!(ComponentKind::Daylight.as_str(), "DAYLIGHT");
        assert_eq!(ComponentKind::Alarm.to_string(), "VALARM");
    }

    #[test]
    fn custom_keeps_unknown_names() {
        let vendor = Component::custom("x-vendor-thing");
        assert_eq!(vendor.kind, ComponentKind::Unknown);
        assert_eq!(vendor.name, "X-VENDOR-THING");

        let event = Component::custom("vevent");
        assert_eq!(event.kind, ComponentKind::Event);
    }

    #[test]
    fn new_calendar_has_version_and_prodid() {
        let ical = ICalendar::new("-//Test//Test//EN");
        assert_eq!(ical.version(), Some("2.0"));
        assert_eq!(ical.prodid(), Some("-//Test//Test//EN"));
        assert_eq!(ical.calscale(), None);
    }

    #[test]
    fn blank_values_count_as_absent() {
        let mut event = Component::event();
        event.add_property(Property::text("UID", "test-uid-123"));
        event.add_property(Property::text("SUMMARY", "Test Event"));
        event.add_property(Property::new("CLASS", ""));

        assert_eq!(event.uid(), Some("test-uid-123"));
        assert_eq!(event.summary(), Some("Test Event"));
        assert!(event.has_value("summary"));
        assert!(!event.has_value("CLASS"));
        assert!(!event.has_value("STATUS"));
    }

    #[test]
    fn set_property_replaces_in_place() {
        let mut cal = Component::new(ComponentKind::Calendar);
        cal.add_property(Property::new("VERSION", "1.0"));
        cal.add_property(Property::new("X-WR-CALNAME", "Team"));

        let replaced = cal.set_property(Property::new("VERSION", "2.0"));
        assert_eq!(replaced.map(|p| p.value), Some("1.0".to_string()));
        assert_eq!(cal.properties[0].value, "2.0");

        assert!(cal.set_property(Property::new("CALSCALE", "GREGORIAN")).is_none());
        assert_eq!(cal.properties.len(), 3);
        assert_eq!(cal.properties[2].name, "CALSCALE");
    }

    #[test]
    fn remove_property_counts() {
        let mut event = Component::event();
        event.add_property(Property::new("ATTENDEE", "mailto:a@example.com"));
        event.add_property(Property::new("ATTENDEE", "mailto:b@example.com"));
        assert_eq!(event.get_properties("attendee").len(), 2);
        assert_eq!(event.remove_property("ATTENDEE"), 2);
        assert!(event.properties.is_empty());
    }

    #[test]
    fn events_and_todos_are_told_apart() {
        let mut ical = ICalendar::new("-//Test//Test//EN");
        for uid in ["event2", "event1"] {
            let mut event = Component::event();
            event.add_property(Property::text("UID", uid));
            ical.add_event(event);
        }
        let mut todo = Component::new(ComponentKind::Todo);
        todo.add_property(Property::text("UID", "event1"));
        ical.root.children.push(todo);

        assert_eq!(ical.events().len(), 2);
        assert_eq!(ical.todos().len(), 1);
        let uids: Vec<_> = ical.events().iter().filter_map(|e| e.uid()).collect();
        assert_eq!(uids, vec!["event2", "event1"]);
    }

    #[test]
    fn mutable_children_only_touch_their_kind() {
        let mut ical = ICalendar::new("-//Test//Test//EN");
        ical.add_event(Component::event());
        ical.root.children.push(Component::custom("VTIMEZONE"));

        for event in ical.events_mut() {
            event.add_property(Property::new("UID", "x"));
        }

        assert_eq!(ical.events()[0].uid(), Some("x"));
        assert!(ical.root.children[1].properties.is_empty());
        assert_eq!(ical.todos_mut().count(), 0);
    }

    #[test]
    fn retain_children_drops_rejected() {
        let mut ical = ICalendar::new("-//Test//Test//EN");
        for uid in ["keep", "drop"] {
            let mut event = Component::event();
            event.add_property(Property::new("UID", uid));
            ical.add_event(event);
        }
        ical.root.retain_children(|c| c.uid() != Some("drop"));
        assert_eq!(ical.events().len(), 1);
        assert_eq!(ical.events()[0].uid(), Some("keep"));
    }
}
