use serde::Serialize;

/// A citation directory a business can list itself on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Directory {
    pub name: &'static str,
    pub url: &'static str,
    /// Domain Authority, 0-100.
    pub da: u8,
    pub category: &'static str,
}

const fn dir(name: &'static str, url: &'static str, da: u8, category: &'static str) -> Directory {
    Directory {
        name,
        url,
        da,
        category,
    }
}

pub const DIRECTORIES: &[Directory] = &[
    dir("Google Business Profile", "https://business.google.com", 100, "Map/Search"),
    dir("Bing Places", "https://www.bingplaces.com", 93, "Map/Search"),
    dir("Apple Business Connect", "https://businessconnect.apple.com", 100, "Map/Search"),
    dir("MapQuest", "https://www.mapquest.com", 88, "Map/Search"),
    dir("Yelp", "https://biz.yelp.com", 94, "General"),
    dir("Better Business Bureau", "https://www.bbb.org", 92, "General"),
    dir("Yellow Pages", "https://www.yellowpages.com", 88, "General"),
    dir("Foursquare", "https://foursquare.com", 92, "General"),
    dir("Manta", "https://www.manta.com", 78, "General"),
    dir("Hotfrog", "https://www.hotfrog.com", 60, "General"),
    dir("Facebook", "https://www.facebook.com/business", 96, "Social"),
    dir("LinkedIn", "https://www.linkedin.com/company/setup/new", 98, "Social"),
    dir("Nextdoor", "https://business.nextdoor.com", 84, "Social"),
    dir("Angi", "https://www.angi.com", 88, "Home Services"),
    dir("HomeAdvisor", "https://pro.homeadvisor.com", 87, "Home Services"),
    dir("Houzz", "https://www.houzz.com/pro", 93, "Home Services"),
    dir("Thumbtack", "https://www.thumbtack.com/pro", 82, "Home Services"),
    dir("Healthgrades", "https://www.healthgrades.com", 87, "Healthcare"),
    dir("Zocdoc", "https://www.zocdoc.com", 79, "Healthcare"),
    dir("Avvo", "https://www.avvo.com", 80, "Legal"),
    dir("FindLaw", "https://lawyers.findlaw.com", 84, "Legal"),
    dir("OpenTable", "https://restaurant.opentable.com", 90, "Food"),
    dir("Tripadvisor", "https://www.tripadvisor.com/Owners", 93, "Travel"),
    dir("Cars.com", "https://www.cars.com", 87, "Automotive"),
    dir("Eventbrite", "https://www.eventbrite.com", 92, "Events"),
];
