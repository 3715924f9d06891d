//! Starter texts applied when a property is created without a value for a
//! field. These match the onboarding copy managers see in the console, so a
//! freshly created record answers common guest questions out of the box.
//! Defaults are applied once at creation; updates never reintroduce them.
//!
//! `pool_heat`, `manager_email`, and `manager_txt` deliberately have no
//! default.

pub const DEFAULT_STATUS: &str = "draft";

// Access & security
pub const LOCK_CODE: &str = "1234";
pub const LOCK_BOX: &str = "1234";
pub const LOCK_INFO: &str = "To Open: Enter the code exactly. Then press the button with the lock. To Lock: Close the door, then press the button with the lock. There is no lockbox";
pub const GATE_CODE: &str = "1234";
pub const GATE_INFO: &str =
    "Present the pass sent with your Arrival Information to the guard, along with ID.";

// Network & technology
pub const NETWORK_NAME: &str = "Spectrum95cDB9";
pub const PASSCODE: &str = "HappyDays123";
pub const ROUTER_INFO: &str = "It's the tall white box next to the TV";
pub const TV_INFO: &str = "Roku TV. Just press 'power' button on the remote, TV will turn on with selection of Roku channels";
pub const NO_SIG: &str = "bit.ly/flc_no_sig";

// Amenities & supplies
pub const LINEN_INFO: &str = "Upstairs, next to the Main Bedroom";
pub const WASHCLOTHS: &str =
    "We provide a supply of towels of different sizes, but we do *not* supply washcloths.";
pub const PACK_N_PLAY: &str = "The Pack-n-Play is in the closet of the Master Bedroom.";
pub const EX_SUPPLY_INFO: &str = "Please understand that this is a \"Self Catering\" unit, meaning that the host provides a small starter amount of expendable supplies - to get families started out. Items are like Toilet paper, Dish Soap, Detergent, shampoo, hand soap etc. Enough so that families won't need for anything on arrival. However, when these starter supplies run out, it is the guest's responsibility if you want to get more.";
pub const DISHWASHER: &str = "Rinse dishes to remove food items. Place detergent pod in container and close door securely. Press \"Wash Cycle\" button.";
pub const COFFEE_MAKER: &str =
    "Standard 12 Cup Machine (size 4 filters). Coffee and filters not provided.";

// Maintenance & operations
pub const GARBAGE_INFO: &str = "Please take all garbage bags to the community compactor, located to the rear of the community next to the tennis courts.";
pub const JACUZZI: &str = "On the left hand side of the jacuzzi, behind the steps, there is a small control. Set the jets to low medium or hi, and the heater to on. The unit will run for 30 minutes. You may need to run it for several cycles to achieve maximum heat.";
pub const LOST_AND_FOUND: &str = "Please note that items found after guest departure are normally discarded by the cleaning team. However we have escalated the issue to the Housekeeping department, which will doublecheck respond within 24 hours.";

// Community access
pub const PASS_LOC: &str = "Community passes are on a lanyard in the kitchen drawer. Please note, there is a $25 fee for replacement if lost.";
pub const PARKING: &str = "Parking passes are in the first kitchen drawer. Hand the tag from your vehicle rear-view mirror.";
pub const POOL_CODE: &str = "1234";
pub const COM_POOL_LOC: &str =
    "The pool is just behind the Clubhouse, across from the community entry gate.";
pub const CLUBHOUSE: &str = "The Clubhouse is just opposite the community entry gate. Bring your Community Pass, found in your kitchen drawer.";

// Management & contact
pub const CHECK_IN: &str = "4pm (or 1600)";
pub const CHECK_OUT: &str = "11am (or 1100)";

// Policies & rules
pub const DELIVERY_INFO: &str = "Please note that as a vacation rental, this unit does *NOT* receive us postal service (mail). Delivery services (FEDEX, DHL Etc) have private policies which frequently change. The community is not set up for delivery to the administration, and the community will not be responsible for packages left outside of units. So: you must first check with your carrier to understand their current policy, and then if they do deliver, you must be present to receive it.";
pub const PET: &str = "We are very sorry but this unit and community are unable to host pets of any kind. Thank you for understanding.";
pub const PARKING_INFO: &str = "No vehicles bearing signage, no commercial vehicles, no trailers or caravans. Vehicles must be in operational condition at all times, and no work may be done on vehicles within the community for any reason. Please note that violators will be towed at your expense, no exceptions.";
