//! Integration test: full facade bring-up for one client.
//!
//! Drives the whole attach sequence - battery, indicator light, profile
//! store, input identity - against mock host subsystems and a recording
//! bus, the way the attach orchestrator would.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use gip_driver::hal::{
    AttributeTree, GroupHandle, InputHandle, InputSubsystem, LedDeviceDesc, LedHandle,
    LedSubsystem, NodeHandle, PowerSubsystem, PowerSupplyDesc, PowerSupplyHandle, RegisterError,
};
use gip_driver::{
    BatteryLevel, BatteryReporter, BatteryType, CapacityLevel, ClientId, ClientInfo,
    HardwareInfo, IndicatorController, LedCapability, PowerSupplyStatus, ProfileStore,
    ProtocolBus, ProtocolError, VirtualInput, BRIGHTNESS_DEFAULT,
};
use gip_transport::cmd;

#[derive(Default)]
struct RecordingBus {
    sent: Mutex<Vec<(u8, Vec<u8>)>>,
}

impl ProtocolBus for RecordingBus {
    fn send(&self, _client: ClientId, opcode: u8, payload: &[u8]) -> Result<(), ProtocolError> {
        self.sent.lock().push((opcode, payload.to_vec()));
        Ok(())
    }
}

#[derive(Default)]
struct HostStub {
    notifications: AtomicU32,
    next_handle: AtomicU64,
    led_devices: Mutex<Vec<LedDeviceDesc>>,
    live_nodes: Mutex<Vec<u64>>,
}

impl HostStub {
    fn next(&self) -> u64 {
        self.next_handle.fetch_add(1, Ordering::Relaxed)
    }
}

impl PowerSubsystem for HostStub {
    fn register(&self, _desc: PowerSupplyDesc) -> Result<PowerSupplyHandle, RegisterError> {
        Ok(PowerSupplyHandle(self.next()))
    }

    fn notify_changed(&self, _handle: PowerSupplyHandle) {
        self.notifications.fetch_add(1, Ordering::Relaxed);
    }
}

impl LedSubsystem for HostStub {
    fn register(&self, desc: LedDeviceDesc) -> Result<LedHandle, RegisterError> {
        self.led_devices.lock().push(desc);
        Ok(LedHandle(self.next()))
    }
}

impl InputSubsystem for HostStub {
    fn allocate(&self) -> Result<InputHandle, RegisterError> {
        Ok(InputHandle(self.next()))
    }
}

impl AttributeTree for HostStub {
    fn create_node(&self, _name: &'static str) -> Result<NodeHandle, RegisterError> {
        let id = self.next();
        self.live_nodes.lock().push(id);
        Ok(NodeHandle(id))
    }

    fn create_group(&self, _name: &str, _nodes: &[NodeHandle]) -> Result<GroupHandle, RegisterError> {
        Ok(GroupHandle(self.next()))
    }

    fn release_node(&self, handle: NodeHandle) {
        self.live_nodes.lock().retain(|&id| id != handle.0);
    }

    fn release_group(&self, _handle: GroupHandle) {}
}

struct Attached {
    bus: Arc<RecordingBus>,
    host: Arc<HostStub>,
    battery: BatteryReporter,
    led: IndicatorController,
    profiles: ProfileStore,
    input: VirtualInput,
}

/// Bring up all four facades the way the attach orchestrator does
fn attach() -> Attached {
    let bus = Arc::new(RecordingBus::default());
    let host = Arc::new(HostStub::default());
    let client = ClientInfo::new(
        ClientId(2),
        "gip0.2",
        HardwareInfo {
            vendor: 0x045E,
            product: 0x0B00,
            version: 0x0503,
        },
    );

    let battery = BatteryReporter::init(host.clone(), &client, "Xbox Elite Controller")
        .expect("battery init");
    let led = IndicatorController::init(bus.clone(), host.clone(), &client, LedCapability::Rgb)
        .expect("led init");
    let profiles = ProfileStore::init(host.clone(), &client).expect("profile init");
    let input = VirtualInput::init(host.clone(), &client, "Xbox Elite Controller")
        .expect("input init");

    Attached {
        bus,
        host,
        battery,
        led,
        profiles,
        input,
    }
}

#[test]
fn attach_brings_up_all_facades() {
    let attached = attach();

    // Initial LED command went out before anything else
    let sent = attached.bus.sent.lock();
    assert_eq!(sent[0].0, cmd::LED);
    assert_eq!(sent[0].1[2], BRIGHTNESS_DEFAULT);
    drop(sent);

    // One multi-color LED device registered
    assert_eq!(attached.host.led_devices.lock().len(), 1);

    // 29 attribute nodes live
    assert_eq!(attached.host.live_nodes.lock().len(), 29);

    // Identity reflects the hardware descriptor
    let id = attached.input.identity();
    assert_eq!(id.phys, "gip0.2/input0");
    assert_eq!(id.vendor, 0x045E);
}

#[test]
fn battery_events_flow_to_the_host() {
    let attached = attach();

    attached
        .battery
        .report(BatteryType::Rechargeable, BatteryLevel::High);
    assert_eq!(attached.battery.status(), PowerSupplyStatus::Discharging);
    assert_eq!(attached.battery.capacity(), CapacityLevel::High);

    attached.battery.report(BatteryType::None, BatteryLevel::High);
    assert_eq!(attached.battery.status(), PowerSupplyStatus::NotCharging);
    assert_eq!(attached.battery.capacity(), CapacityLevel::Unknown);

    assert_eq!(attached.host.notifications.load(Ordering::Relaxed), 2);
}

#[test]
fn mode_write_and_brightness_change_reach_the_bus() {
    let attached = attach();

    attached.led.mode_store("3").unwrap();
    attached.led.on_brightness_change(50);

    let sent = attached.bus.sent.lock();
    let last_mode = sent.iter().rev().find(|(op, _)| *op == cmd::LED).unwrap();
    assert_eq!(last_mode.1, vec![0, 3, 50]);

    let color = sent.iter().find(|(op, _)| *op == cmd::RGB_LED).unwrap();
    assert_eq!(color.1, vec![255, 255, 255]);
}

#[test]
fn profile_round_trip_and_detach_cleanup() {
    let attached = attach();

    attached.profiles.write("lb", "5").unwrap();
    assert_eq!(attached.profiles.read("lb").unwrap(), 5);
    assert!(attached.profiles.write("lb", "xyz").is_err());
    assert_eq!(attached.profiles.read("lb").unwrap(), 5);

    // Detach: teardown guard stops LED traffic, attribute surface goes away
    attached.led.begin_teardown();
    let before = attached.bus.sent.lock().len();
    attached.led.on_brightness_change(10);
    assert_eq!(attached.bus.sent.lock().len(), before);

    attached.profiles.release();
    assert!(attached.host.live_nodes.lock().is_empty());
}
